//! Stateless request builder and response mapper for the character API.
//!
//! # Design
//! `CharacterClient` holds only a `base_url`. `build_get_character` produces
//! the request; `parse_get_character` turns whatever came back into either a
//! `Character` or a `FetchError`. Transport failures never reach the parser,
//! they are mapped by the service before it gets here.

use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Character;

/// Status the upstream API uses for "character not found".
pub const STATUS_NOT_FOUND: u16 = 201;

/// Status treated as an upstream server failure.
pub const STATUS_SERVER_ERROR: u16 = 500;

/// Synchronous, stateless client for the character API.
#[derive(Debug, Clone)]
pub struct CharacterClient {
    base_url: String,
}

impl CharacterClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/character/{id}`. The id is not validated locally.
    pub fn build_get_character(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/character/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Map a received response. 201 wins over 500, which wins over decoding.
    pub fn parse_get_character(&self, response: HttpResponse) -> Result<Character, FetchError> {
        match response.status {
            STATUS_NOT_FOUND => Err(FetchError::NotFound),
            STATUS_SERVER_ERROR => Err(FetchError::ServerError),
            _ => serde_json::from_str(&response.body).map_err(|e| {
                tracing::debug!(status = response.status, error = %e, "undecodable character payload");
                FetchError::InvalidPayload
            }),
        }
    }
}
