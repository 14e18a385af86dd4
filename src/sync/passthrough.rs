//! Pass-through synchronization for single-threaded targets.
//!
//! On `wasm32` there is one logical thread of execution, so critical
//! sections never actually contend. The registry here preserves the same
//! API as the multi-threaded one but runs blocks directly, without
//! materializing any mutex.

use crate::sync::LockKey;

/// Registry of named critical sections that never contend.
#[derive(Debug, Clone, Copy, Default)]
pub struct LockRegistry;

impl LockRegistry {
    /// Create a registry.
    pub fn new() -> Self {
        Self
    }

    /// Run `block` directly and return its result.
    ///
    /// Observably indistinguishable from calling `block()`; errors and
    /// panics propagate unchanged.
    pub fn run_synchronized<R, F>(&self, _lock: &LockKey, block: F) -> R
    where
        F: FnOnce() -> R,
    {
        block()
    }

    /// Always zero: no locks are materialized on single-threaded targets.
    pub fn lock_count(&self) -> usize {
        0
    }
}
