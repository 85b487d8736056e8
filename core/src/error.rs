//! Error types for the character client.
//!
//! # Design
//! `FetchError` is the closed failure taxonomy of a single fetch. It carries
//! no payload so it stays `Copy` and comparable; the underlying cause is
//! logged where the kind is decided. `TransportError` describes what went
//! wrong below HTTP and is always folded into `FetchError::Timeout`.

use std::time::Duration;

use thiserror::Error;

/// Why a character fetch failed. Exactly one kind per failed call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchError {
    /// No response arrived: connection error, timeout, or unreadable body.
    #[error("request timed out or never reached the server")]
    Timeout,

    /// The body could not be decoded into a `Character`.
    #[error("response body is not a valid character payload")]
    InvalidPayload,

    /// The server answered 500.
    #[error("server error")]
    ServerError,

    /// The server answered 201, the upstream's "character not found" signal.
    #[error("character not found")]
    NotFound,
}

impl FetchError {
    /// Every kind, in declaration order.
    pub const ALL: [FetchError; 4] = [
        FetchError::Timeout,
        FetchError::InvalidPayload,
        FetchError::ServerError,
        FetchError::NotFound,
    ];
}

/// Failures below the HTTP layer, reported by a `Transport`.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out after {after:?}")]
    TimedOut { after: Duration },

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("failed to build request: {0}")]
    Request(String),
}
