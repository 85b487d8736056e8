//! Client configuration.

use std::time::Duration;

/// Public character API.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Per-request timeout enforced by the transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://rickandmortyapi.com/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
