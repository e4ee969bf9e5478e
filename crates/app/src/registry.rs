//! The endpoint registry — the single owner of all mutable fixture state.
//!
//! A registry maps request paths to method tables, and method tables map
//! HTTP methods to response descriptors. It is built once at startup and
//! lives for the process lifetime; mutation hooks are the only writers and
//! nothing is ever removed.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use picomock_domain::error::PicoMockError;
use picomock_domain::method::Method;

/// Side effect a descriptor triggers before its reply is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    /// Merge the parsed request body into the GET body of the same path.
    SettingsPatch,
    /// Advance the uptime counters and re-sample the jittering ADC channels.
    TelemetryTick,
}

/// Status code, body, and optional hook for one (path, method) pair.
///
/// The body sits behind its own mutex so concurrent requests serialize
/// their mutations per descriptor; hooks are bounded synchronous
/// computations, so the lock is never held long.
#[derive(Debug)]
pub struct Descriptor {
    status: u16,
    body: Mutex<Value>,
    hook: Option<Hook>,
}

impl Descriptor {
    /// A plain canned response.
    #[must_use]
    pub fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Mutex::new(body),
            hook: None,
        }
    }

    /// A canned response with a mutation hook.
    #[must_use]
    pub fn with_hook(status: u16, body: Value, hook: Hook) -> Self {
        Self {
            status,
            body: Mutex::new(body),
            hook: Some(hook),
        }
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub fn hook(&self) -> Option<Hook> {
        self.hook
    }

    /// Clone the current body.
    #[must_use]
    pub fn snapshot(&self) -> Value {
        self.lock_body().clone()
    }

    /// Mutate the body under the descriptor's lock.
    pub fn update<F: FnOnce(&mut Value)>(&self, mutate: F) {
        mutate(&mut self.lock_body());
    }

    /// Mutate the body under the descriptor's lock, propagating failures.
    ///
    /// # Errors
    ///
    /// Returns whatever the closure returns.
    pub fn try_update<F>(&self, mutate: F) -> Result<(), PicoMockError>
    where
        F: FnOnce(&mut Value) -> Result<(), PicoMockError>,
    {
        mutate(&mut self.lock_body())
    }

    fn lock_body(&self) -> std::sync::MutexGuard<'_, Value> {
        // Hooks never panic while holding the lock; recover the guard if
        // one somehow did rather than poisoning every later request.
        self.body.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Method → descriptor mapping for one path, at most one entry per method.
#[derive(Debug, Default)]
pub struct MethodTable {
    entries: HashMap<Method, Descriptor>,
}

impl MethodTable {
    /// Register `descriptor` for `method`, replacing any previous entry.
    pub fn insert(&mut self, method: Method, descriptor: Descriptor) {
        self.entries.insert(method, descriptor);
    }

    #[must_use]
    pub fn descriptor(&self, method: Method) -> Option<&Descriptor> {
        self.entries.get(&method)
    }
}

/// Path → method table mapping, paths unique.
#[derive(Debug, Default)]
pub struct Registry {
    endpoints: HashMap<String, MethodTable>,
}

impl Registry {
    /// Register `table` under `path`, replacing any previous table.
    pub fn register(&mut self, path: impl Into<String>, table: MethodTable) {
        self.endpoints.insert(path.into(), table);
    }

    #[must_use]
    pub fn table(&self, path: &str) -> Option<&MethodTable> {
        self.endpoints.get(path)
    }

    /// All registered paths, in no particular order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.endpoints.keys().map(String::as_str)
    }
}
