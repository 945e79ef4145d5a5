//! Per-call dispatch: the suffix rule, execution modes and the awaitable
//! returned by every proxied call.

use std::fmt;
use std::future::{Future, Ready};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use resource_core::{ApiEndpointCollection, ApiError, Resource, ResourceId};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, Span};

use crate::error::ProxyError;
use crate::registry::Route;

/// Suffix that selects offloaded execution.
pub const ASYNC_SUFFIX: &str = "_async";

/// Where a proxied call runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// On the caller's own thread, blocking it for the duration of the call.
    Direct,
    /// On a tokio blocking-pool thread; the caller is free until it awaits.
    Offloaded,
}

/// Split a requested name into its target operation and execution mode.
///
/// `retrieve_resource_async` resolves to (`retrieve_resource`, `Offloaded`);
/// any name without the suffix resolves to itself with `Direct`.
pub fn resolve_name(name: &str) -> (&str, ExecutionMode) {
    match name.strip_suffix(ASYNC_SUFFIX) {
        Some(target) => (target, ExecutionMode::Offloaded),
        None => (name, ExecutionMode::Direct),
    }
}

/// Signature shared by every endpoint operation that can be proxied.
pub type Operation = fn(&ApiEndpointCollection, ResourceId) -> Result<Resource, ApiError>;

/// Callable produced by resolving one name: the target operation plus the
/// mode chosen for it. Built fresh on every lookup.
#[derive(Clone)]
pub struct EndpointProxy {
    name: String,
    target: String,
    operation: Operation,
    mode: ExecutionMode,
    collection: Arc<ApiEndpointCollection>,
    handle: Handle,
}

impl EndpointProxy {
    pub(crate) fn new(
        name: &str,
        route: &Route,
        collection: Arc<ApiEndpointCollection>,
        handle: Handle,
    ) -> Self {
        Self {
            name: name.to_string(),
            target: route.target().to_string(),
            operation: route.operation(),
            mode: route.mode(),
            collection,
            handle,
        }
    }

    /// The name this proxy was resolved from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The operation actually invoked.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Invoke the operation.
    ///
    /// In `Direct` mode the operation runs now, on this thread, and the
    /// returned future is already resolved. In `Offloaded` mode it is handed
    /// to the blocking pool and the future resolves when the worker finishes.
    pub fn call(&self, id: ResourceId) -> Dispatched {
        let operation = self.operation;
        match self.mode {
            ExecutionMode::Direct => {
                debug!(requested = %self.name, id, "running direct call");
                let outcome = operation(&self.collection, id).map_err(ProxyError::from);
                Dispatched {
                    inner: Inner::Ready(std::future::ready(outcome)),
                }
            }
            ExecutionMode::Offloaded => {
                debug!(requested = %self.name, operation = %self.target, id, "offloading call");
                let collection = Arc::clone(&self.collection);
                let span = Span::current();
                let worker = self
                    .handle
                    .spawn_blocking(move || span.in_scope(|| operation(&collection, id)));
                Dispatched {
                    inner: Inner::Offloaded(worker),
                }
            }
        }
    }
}

impl fmt::Debug for EndpointProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointProxy")
            .field("name", &self.name)
            .field("target", &self.target)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// Outcome of `EndpointProxy::call`, resolved immediately (direct) or when
/// the worker completes (offloaded).
#[must_use = "the call's result is only observable by awaiting it"]
#[derive(Debug)]
pub struct Dispatched {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    Ready(Ready<Result<Resource, ProxyError>>),
    Offloaded(JoinHandle<Result<Resource, ApiError>>),
}

impl Dispatched {
    pub fn mode(&self) -> ExecutionMode {
        match self.inner {
            Inner::Ready(_) => ExecutionMode::Direct,
            Inner::Offloaded(_) => ExecutionMode::Offloaded,
        }
    }
}

impl Future for Dispatched {
    type Output = Result<Resource, ProxyError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().inner {
            Inner::Ready(ready) => Pin::new(ready).poll(cx),
            Inner::Offloaded(worker) => match Pin::new(worker).poll(cx) {
                Poll::Pending => Poll::Pending,
                Poll::Ready(Ok(outcome)) => Poll::Ready(outcome.map_err(ProxyError::from)),
                // A worker panic unwinds the awaiting task, as it would a direct caller.
                Poll::Ready(Err(join_error)) if join_error.is_panic() => {
                    std::panic::resume_unwind(join_error.into_panic())
                }
                Poll::Ready(Err(join_error)) => {
                    Poll::Ready(Err(ProxyError::Worker(join_error.to_string())))
                }
            },
        }
    }
}
