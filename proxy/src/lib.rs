//! Awaitable wrapper around `resource-core`.
//!
//! # Overview
//! Exposes every synchronous endpoint operation under two names: `op`, which
//! runs on the caller's own thread, and `op_async`, which is offloaded to the
//! tokio blocking pool. Both are awaited the same way.
//!
//! # Design
//! - `OperationTable` is built once and maps each name to its target
//!   operation and `ExecutionMode`; nothing is resolved by reflection.
//! - `AsyncApiClientProxy` forwards attribute lookups to the client's
//!   collection, `AsyncEndpointCollectionProxy` resolves operation names, and
//!   `EndpointProxy` is the per-call dispatch wrapper.
//! - Proxies share the wrapped client through `Arc` and never manage its
//!   lifecycle. The runtime `Handle` is passed in explicitly.
//! - Failures from the wrapped operation surface unchanged through
//!   `ProxyError::Api`.

pub mod dispatch;
pub mod error;
pub mod proxy;
pub mod registry;

pub use dispatch::{
    resolve_name, Dispatched, EndpointProxy, ExecutionMode, Operation, ASYNC_SUFFIX,
};
pub use error::ProxyError;
pub use proxy::{AsyncApiClientProxy, AsyncEndpointCollectionProxy};
pub use registry::{OperationTable, Route, RETRIEVE_RESOURCE};
