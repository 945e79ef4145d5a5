//! Error types for the async proxy.
//!
//! # Design
//! Lookup failures are the proxy's own; everything the wrapped operation
//! reports passes through `Api` untouched so awaiting callers see the same
//! `ApiError` a direct caller would.

use resource_core::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    /// No operation is registered under the requested name.
    #[error("no operation named `{name}`")]
    UnknownOperation { name: String },

    /// The client has no collection under the requested attribute name.
    #[error("client has no attribute `{0}`")]
    UnknownAttribute(String),

    /// An operation could not be added to an `OperationTable`.
    #[error("cannot register operation `{name}`: {reason}")]
    InvalidRegistration { name: String, reason: String },

    /// Transport or decode failure from the wrapped operation.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The offloaded worker was cancelled, e.g. by runtime shutdown. Worker
    /// panics are resumed in the awaiting task instead.
    #[error("offloaded worker failed: {0}")]
    Worker(String),
}
