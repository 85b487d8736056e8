//! Async client core for the character API.
//!
//! # Overview
//! Fetches one character by id and exposes the progress of that load as an
//! observable view state (`Initial → Loading → Display | Error`).
//!
//! # Design
//! - `CharacterClient` is sans-IO: it builds `HttpRequest` values and maps
//!   `HttpResponse` values, so every status/body rule is unit-testable.
//! - `Transport` is the only place that touches the network;
//!   `ReqwestTransport` is the production implementation.
//! - `RemoteCharacterService` combines the two and owns the failure taxonomy.
//! - `CharacterViewModel` drives a `StateCell<ViewState>` that any number of
//!   subscribers can observe without a UI framework.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod observable;
pub mod service;
pub mod transport;
pub mod types;
pub mod view_model;

pub use client::CharacterClient;
pub use config::ClientConfig;
pub use error::{FetchError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use observable::StateCell;
pub use service::{CharacterService, RemoteCharacterService};
pub use transport::{ReqwestTransport, Transport};
pub use types::Character;
pub use view_model::{CharacterViewModel, ViewState};
