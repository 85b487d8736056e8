//! HTTP transport types for the host-does-IO split.
//!
//! # Design
//! Requests and responses are plain owned data. `CharacterClient` builds an
//! `HttpRequest` and maps an `HttpResponse` without touching the network;
//! a `Transport` implementation performs the round-trip in between. Tests
//! can therefore feed any status/body pair straight into the mapper.

/// HTTP method for a request. The character API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Any status is representable; interpreting it is the mapper's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Response with the given status and body and no headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
