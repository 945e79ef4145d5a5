//! Resource endpoints and the client that owns them.
//!
//! # Design
//! `ApiEndpointCollection` holds only the base URL and a shared transport; it
//! carries no mutable state between calls. `retrieve_resource` is split into
//! `build_retrieve_resource` and `parse_retrieve_resource` around a single
//! `Transport::execute`, keeping both halves deterministic.
//!
//! `ApiClient` owns exactly one collection, created at construction and never
//! replaced. It is held behind an `Arc` so proxies can share it without
//! owning its lifecycle.

use std::sync::Arc;

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::types::{Resource, ResourceId};

/// Path of the resource endpoint, relative to the base URL.
pub const RESOURCE_PATH: &str = "/get";

/// Query parameter carrying the resource identifier.
pub const RESOURCE_ID_PARAM: &str = "id";

/// Name under which `ApiClient` exposes its endpoint collection.
pub const ENDPOINTS: &str = "endpoints";

/// The set of operations a client exposes.
#[derive(Debug, Clone)]
pub struct ApiEndpointCollection {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ApiEndpointCollection {
    pub fn new(config: &ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            transport,
        }
    }

    pub fn build_retrieve_resource(&self, id: ResourceId) -> HttpRequest {
        HttpRequest {
            url: format!("{}{RESOURCE_PATH}", self.base_url),
            query: vec![(RESOURCE_ID_PARAM.to_string(), id.to_string())],
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Decode the body into a JSON object. The status code is not checked;
    /// whatever the service answers is returned as long as it decodes.
    pub fn parse_retrieve_resource(&self, response: HttpResponse) -> Result<Resource, ApiError> {
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Retrieve a resource from the API.
    ///
    /// Issues exactly one request. Transport and decode failures are returned
    /// unchanged.
    pub fn retrieve_resource(&self, id: ResourceId) -> Result<Resource, ApiError> {
        let request = self.build_retrieve_resource(id);
        debug!(url = %request.full_url(), "retrieving resource");
        let response = self.transport.execute(&request)?;
        debug!(status = response.status, "resource response received");
        self.parse_retrieve_resource(response)
    }
}

/// Top-level handle: owns one `ApiEndpointCollection`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoints: Arc<ApiEndpointCollection>,
}

impl ApiClient {
    /// Client configured from the environment, using the `ureq` transport.
    pub fn from_env() -> Self {
        Self::with_config(ClientConfig::from_env())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(UreqTransport::new()))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoints: Arc::new(ApiEndpointCollection::new(&config, transport)),
        }
    }

    pub fn endpoints(&self) -> &ApiEndpointCollection {
        &self.endpoints
    }

    /// Shared handle to the collection, for views that outlive a borrow.
    pub fn shared_endpoints(&self) -> Arc<ApiEndpointCollection> {
        Arc::clone(&self.endpoints)
    }

    /// Look up a collection by attribute name. `endpoints` is the only one.
    pub fn collection(&self, name: &str) -> Option<Arc<ApiEndpointCollection>> {
        (name == ENDPOINTS).then(|| Arc::clone(&self.endpoints))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_env()
    }
}
