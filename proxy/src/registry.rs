//! Explicit name-to-operation table.
//!
//! # Design
//! Registering an operation `op` inserts two routes: `op` (direct) and
//! `op_async` (offloaded), both targeting the same function. Lookups are
//! plain map reads; a name missing from the table is an error at resolution
//! time, before anything runs. Names are validated when registered.

use std::collections::BTreeMap;
use std::fmt;

use resource_core::ApiEndpointCollection;

use crate::dispatch::{resolve_name, ExecutionMode, Operation, ASYNC_SUFFIX};
use crate::error::ProxyError;

/// Name of the standard retrieval operation.
pub const RETRIEVE_RESOURCE: &str = "retrieve_resource";

/// One table entry: which operation a name reaches and how it runs.
#[derive(Clone)]
pub struct Route {
    target: String,
    operation: Operation,
    mode: ExecutionMode,
}

impl Route {
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("target", &self.target)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OperationTable {
    routes: BTreeMap<String, Route>,
}

impl OperationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table for `ApiEndpointCollection`: `retrieve_resource` in both forms.
    pub fn endpoints() -> Self {
        let mut table = Self::new();
        table.insert_pair(RETRIEVE_RESOURCE, ApiEndpointCollection::retrieve_resource);
        table
    }

    /// Register `operation` under `name` and `name` + `_async`.
    ///
    /// Fails if `name` is empty, already carries the `_async` suffix, or
    /// either form is taken. On failure the table is left unchanged.
    pub fn register(&mut self, name: &str, operation: Operation) -> Result<(), ProxyError> {
        let invalid = |reason: String| ProxyError::InvalidRegistration {
            name: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("name is empty".to_string()));
        }
        if resolve_name(name).1 == ExecutionMode::Offloaded {
            return Err(invalid(format!("name already ends with `{ASYNC_SUFFIX}`")));
        }
        let offloaded = format!("{name}{ASYNC_SUFFIX}");
        for taken in [name, offloaded.as_str()] {
            if self.routes.contains_key(taken) {
                return Err(invalid(format!("`{taken}` is already registered")));
            }
        }

        self.insert_pair(name, operation);
        Ok(())
    }

    fn insert_pair(&mut self, name: &str, operation: Operation) {
        for requested in [name.to_string(), format!("{name}{ASYNC_SUFFIX}")] {
            let (target, mode) = resolve_name(&requested);
            let route = Route {
                target: target.to_string(),
                operation,
                mode,
            };
            self.routes.insert(requested, route);
        }
    }

    pub fn resolve(&self, name: &str) -> Result<&Route, ProxyError> {
        self.routes.get(name).ok_or_else(|| ProxyError::UnknownOperation {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Every callable name with its execution mode, in name order.
    pub fn names(&self) -> impl Iterator<Item = (&str, ExecutionMode)> + '_ {
        self.routes
            .iter()
            .map(|(name, route)| (name.as_str(), route.mode))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
