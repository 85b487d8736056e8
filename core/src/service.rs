//! Character fetch service.
//!
//! # Design
//! `RemoteCharacterService` glues the sans-IO `CharacterClient` to a
//! `Transport`: build the request, execute it once, map the outcome. Any
//! transport failure becomes `FetchError::Timeout` whatever its cause. The
//! service keeps no state between calls, so one instance can serve
//! concurrent loads for different ids.

use std::future::Future;

use crate::client::CharacterClient;
use crate::config::ClientConfig;
use crate::error::{FetchError, TransportError};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::Character;

/// Loads a single character by id.
pub trait CharacterService: Send + Sync {
    fn load(&self, id: i64) -> impl Future<Output = Result<Character, FetchError>> + Send;
}

/// `CharacterService` that talks to the remote API through a `Transport`.
#[derive(Debug, Clone)]
pub struct RemoteCharacterService<T> {
    client: CharacterClient,
    transport: T,
}

impl<T: Transport> RemoteCharacterService<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: CharacterClient::new(base_url),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl RemoteCharacterService<ReqwestTransport> {
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::new(&config.base_url, transport))
    }
}

impl<T: Transport> CharacterService for RemoteCharacterService<T> {
    async fn load(&self, id: i64) -> Result<Character, FetchError> {
        let request = self.client.build_get_character(id);
        tracing::debug!(id, url = %request.url, "loading character");

        let response = self.transport.execute(request).await.map_err(|e| {
            tracing::warn!(id, error = %e, "transport failure");
            FetchError::Timeout
        })?;

        let status = response.status;
        self.client.parse_get_character(response).inspect_err(|kind| {
            tracing::warn!(id, status, error = %kind, "character load failed");
        })
    }
}
