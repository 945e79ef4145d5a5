//! Client-level and collection-level proxies.
//!
//! # Design
//! `AsyncApiClientProxy` forwards attribute lookups to the collections the
//! client owns. Each lookup produces an `AsyncEndpointCollectionProxy`, which
//! resolves operation names through the shared `OperationTable` into
//! `EndpointProxy` values. Both layers are cheap views over `Arc`s.

use std::sync::Arc;

use resource_core::{ApiClient, ApiEndpointCollection, Resource, ResourceId};
use tokio::runtime::Handle;
use tracing::debug;

use crate::dispatch::{EndpointProxy, ASYNC_SUFFIX};
use crate::error::ProxyError;
use crate::registry::{OperationTable, RETRIEVE_RESOURCE};

/// Awaitable view over an `ApiClient`.
#[derive(Debug, Clone)]
pub struct AsyncApiClientProxy {
    client: Arc<ApiClient>,
    table: Arc<OperationTable>,
    handle: Handle,
}

impl AsyncApiClientProxy {
    /// Proxy `client` with the standard endpoint table. Offloaded calls are
    /// spawned on `handle`.
    pub fn new(client: Arc<ApiClient>, handle: Handle) -> Self {
        Self::with_table(client, OperationTable::endpoints(), handle)
    }

    pub fn with_table(client: Arc<ApiClient>, table: OperationTable, handle: Handle) -> Self {
        Self {
            client,
            table: Arc::new(table),
            handle,
        }
    }

    /// The wrapped client, for plain synchronous calls.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Forward an attribute lookup to the client.
    pub fn attribute(&self, name: &str) -> Result<AsyncEndpointCollectionProxy, ProxyError> {
        let collection = self
            .client
            .collection(name)
            .ok_or_else(|| ProxyError::UnknownAttribute(name.to_string()))?;
        Ok(self.wrap(collection))
    }

    pub fn endpoints(&self) -> AsyncEndpointCollectionProxy {
        self.wrap(self.client.shared_endpoints())
    }

    fn wrap(&self, collection: Arc<ApiEndpointCollection>) -> AsyncEndpointCollectionProxy {
        AsyncEndpointCollectionProxy {
            collection,
            table: Arc::clone(&self.table),
            handle: self.handle.clone(),
        }
    }
}

/// Awaitable view over an `ApiEndpointCollection`.
#[derive(Debug, Clone)]
pub struct AsyncEndpointCollectionProxy {
    collection: Arc<ApiEndpointCollection>,
    table: Arc<OperationTable>,
    handle: Handle,
}

impl AsyncEndpointCollectionProxy {
    /// Resolve `name` to a dispatch wrapper. Names ending in `_async` run
    /// offloaded; all others run direct.
    pub fn endpoint(&self, name: &str) -> Result<EndpointProxy, ProxyError> {
        let route = self.table.resolve(name)?;
        debug!(
            requested = name,
            operation = route.target(),
            mode = ?route.mode(),
            "resolved endpoint"
        );
        Ok(EndpointProxy::new(
            name,
            route,
            Arc::clone(&self.collection),
            self.handle.clone(),
        ))
    }

    pub fn collection(&self) -> &ApiEndpointCollection {
        &self.collection
    }

    /// `retrieve_resource`, run on the caller's thread.
    pub async fn retrieve_resource(&self, id: ResourceId) -> Result<Resource, ProxyError> {
        self.endpoint(RETRIEVE_RESOURCE)?.call(id).await
    }

    /// `retrieve_resource`, offloaded to the blocking pool.
    pub async fn retrieve_resource_async(&self, id: ResourceId) -> Result<Resource, ProxyError> {
        self.endpoint(&format!("{RETRIEVE_RESOURCE}{ASYNC_SUFFIX}"))?.call(id).await
    }
}
