//! Two-state cache for values probed from the environment.
//!
//! Probes (PATH lookups, `--version` runs) are idempotent, so concurrent
//! first reads may each compute the value; the last write wins. The lock is
//! only held to copy the slot in or out, never while probing.

use std::sync::{PoisonError, RwLock};

/// State of a probed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cached<T> {
    Unresolved,
    Resolved(T),
}

/// Lazily resolved, explicitly invalidatable value.
#[derive(Debug)]
pub struct ProbeCache<T> {
    slot: RwLock<Cached<T>>,
}

impl<T: Clone> ProbeCache<T> {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(Cached::Unresolved),
        }
    }

    /// Current state without resolving.
    pub fn peek(&self) -> Cached<T> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Return the cached value, running `probe` on first use.
    pub fn get_or_resolve(&self, probe: impl FnOnce() -> T) -> T {
        if let Cached::Resolved(value) = self.peek() {
            return value;
        }
        let value = probe();
        self.set(value.clone());
        value
    }

    pub fn set(&self, value: T) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Cached::Resolved(value);
    }

    /// Forget the cached value; the next read probes again.
    pub fn invalidate(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Cached::Unresolved;
    }
}

impl<T: Clone> Default for ProbeCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ProbeCache<T> {
    fn clone(&self) -> Self {
        Self {
            slot: RwLock::new(self.peek()),
        }
    }
}
