//! Fetch resource 43 through both proxied names and print the results.
//!
//! Set `RESOURCE_API_BASE_URL` to point at a local mock server and
//! `RUST_LOG=debug` to see the dispatch decisions.

use std::sync::Arc;

use resource_core::ApiClient;
use resource_proxy::{AsyncApiClientProxy, ProxyError};
use tokio::runtime::Handle;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ProxyError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = AsyncApiClientProxy::new(Arc::new(ApiClient::from_env()), Handle::current());
    let endpoints = client.endpoints();

    let direct = endpoints.retrieve_resource(43).await?;
    info!("direct call finished");
    println!("{}", serde_json::Value::Object(direct));

    let offloaded = endpoints.retrieve_resource_async(43).await?;
    info!("offloaded call finished");
    println!("{}", serde_json::Value::Object(offloaded));

    Ok(())
}
