//! Synchronous API client core for the resource service.
//!
//! # Overview
//! `ApiClient` owns one `ApiEndpointCollection`, which exposes the
//! `retrieve_resource` operation: one `GET {base_url}/get?id={id}` decoded
//! into a JSON object.
//!
//! # Design
//! - Each operation is split into `build_*` (produces an `HttpRequest`) and
//!   `parse_*` (consumes an `HttpResponse`), so the I/O boundary is explicit.
//! - The round-trip itself goes through the `Transport` trait. `UreqTransport`
//!   is the blocking default; tests substitute in-memory transports.
//! - Failures are never caught or translated here: transport and decode
//!   errors surface to the immediate caller.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use client::{
    ApiClient, ApiEndpointCollection, ENDPOINTS, RESOURCE_ID_PARAM, RESOURCE_PATH,
};
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use types::{Resource, ResourceId};
