//! Error types for the resource API client.
//!
//! # Design
//! Only two things can go wrong in a call: the round-trip fails, or the body
//! is not a JSON object. Neither is retried or recovered locally; both carry
//! the underlying message for debugging.

use thiserror::Error;

/// Errors returned by `ApiEndpointCollection` operations and transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP round-trip failed (connection, TLS, I/O while reading).
    #[error("transport failed: {0}")]
    TransportError(String),

    /// The response body could not be decoded into a JSON object.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}
