//! Function table
//!
//! Built-ins are registered by name. A handler receives the table, the
//! environment and its arguments *unevaluated*, so it decides what to
//! evaluate and when. That is how `and`, `or` and `if` short-circuit.

use crate::{Environment, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A built-in function
pub type Handler = Arc<dyn Fn(&FunctionTable, &Environment, &[Value]) -> Value + Send + Sync>;

/// Registry mapping function names to handlers.
///
/// Cloning is cheap: handlers are shared.
#[derive(Clone, Default)]
pub struct FunctionTable {
    handlers: HashMap<String, Handler>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&FunctionTable, &Environment, &[Value]) -> Value + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Arc::new(handler));
    }

    /// Builder-style `register`
    pub fn with<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&FunctionTable, &Environment, &[Value]) -> Value + Send + Sync + 'static,
    {
        self.register(name, handler);
        self
    }

    /// Add every entry of `other`; entries from `other` win on conflict.
    pub fn merge(mut self, other: FunctionTable) -> Self {
        self.handlers.extend(other.handlers);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.handlers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Handler> {
        self.handlers.remove(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for FunctionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionTable")
            .field("functions", &self.names())
            .finish()
    }
}
