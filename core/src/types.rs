//! Domain model for the character API.
//!
//! # Design
//! `Character` mirrors the subset of the upstream payload the app renders.
//! It is defined independently from the mock-server's richer fixture type;
//! serde ignores the extra upstream fields (`type`, `origin`, `episode`, ...)
//! so the integration tests catch drift in the fields we actually read.

use serde::{de, Deserialize, Deserializer, Serialize};

/// A single character returned by `GET /character/{id}`.
///
/// Only produced by decoding a response body. Equality is structural.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
    /// Avatar URL, kept verbatim from the payload. Must parse as an absolute URL.
    #[serde(deserialize_with = "absolute_url")]
    pub image: String,
}

fn absolute_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    reqwest::Url::parse(&raw)
        .map_err(|e| <D::Error as de::Error>::custom(format!("invalid image URL {raw:?}: {e}")))?;
    Ok(raw)
}
