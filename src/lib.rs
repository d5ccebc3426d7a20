//! Rust client library for the Tochka Bank Open Banking REST API.
//!
//! Public API layers:
//! - [`ApiClient`]/[`BlockingApiClient`]: generic JSON HTTP clients.
//! - [`TochkaClient`]/[`BlockingTochkaClient`]: registry-driven operation
//!   clients, with typed per-area methods on the async variant.
//! - [`models`]: declared request/response shapes of the vendor API.
//! - [`ClientError`]: unified error type used by all clients.
//!
//! The operation registry in [`operations`] transcribes the bank's published
//! OpenAPI document; the bank owns the protocol, this crate only declares its
//! surface and performs the HTTP calls.

mod api;
mod blocking_client;
mod client;
mod error;
mod openapi_client;

pub mod models;
pub mod operations;

/// Generic blocking JSON REST client.
pub use blocking_client::BlockingApiClient;
/// Generic async JSON REST client.
pub use client::ApiClient;
/// Error type returned by all client operations.
pub use error::ClientError;
/// Registry-backed operation clients.
///
/// See also [`TochkaClient`] for the async variant with typed methods.
pub use openapi_client::{BlockingTochkaClient, TochkaClient, default_server_url};
pub use operations::OperationDefinition;
