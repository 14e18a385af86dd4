//! Keyed mutual exclusion for multi-threaded targets.

use crate::sync::LockKey;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;

/// Registry of named mutual-exclusion primitives.
///
/// Each [`LockKey`] maps to one mutex, created on first use and kept for
/// the lifetime of the registry. Distinct keys never contend with each
/// other. The mutexes do not poison: a panic inside a critical section
/// releases the lock and leaves it usable for subsequent callers.
#[derive(Debug, Default)]
pub struct LockRegistry {
    locks: DashMap<LockKey, Arc<Mutex<()>>>,
}

impl LockRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `block` while holding the mutex registered under `lock`.
    ///
    /// The mutex is acquired before `block` runs and released on every
    /// exit path, including unwinding. `block`'s result (or panic)
    /// propagates to the caller unchanged after release.
    ///
    /// The mutexes are not reentrant: nesting calls with equal keys on
    /// the same thread deadlocks.
    pub fn run_synchronized<R, F>(&self, lock: &LockKey, block: F) -> R
    where
        F: FnOnce() -> R,
    {
        // Clone the Arc out of the map before locking: the map's shard
        // guard must not be held while blocking on the mutex.
        let mutex = self
            .locks
            .entry(lock.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = mutex.lock();
        block()
    }

    /// Number of distinct keys that have been synchronized on so far.
    pub fn lock_count(&self) -> usize {
        self.locks.len()
    }
}
