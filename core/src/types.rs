//! Domain types for the resource API.
//!
//! The remote service returns an arbitrary JSON object; no schema is applied,
//! so a resource is just the decoded key-value mapping.

/// Identifier of a remote resource, sent as the `id` query parameter.
pub type ResourceId = i64;

/// Decoded response body: string keys, arbitrary JSON values.
pub type Resource = serde_json::Map<String, serde_json::Value>;
