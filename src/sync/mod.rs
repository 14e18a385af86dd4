//! Synchronized execution keyed by lock identity.
//!
//! `run_synchronized` gives callers a named critical section: two calls
//! with equal [`LockKey`]s never overlap, while distinct keys never
//! contend. The semantics are selected per target at compile time:
//!
//! - On multi-threaded targets, [`LockRegistry`] holds one real mutex per
//!   key, acquired around the block and released on every exit path.
//! - On `wasm32`, where there is a single logical thread of execution, the
//!   same API is a pure pass-through and never blocks.
//!
//! Whatever the block produces - a value, an `Err`, or a panic - reaches
//! the caller unchanged after the lock is released.
//!
//! # Example
//!
//! ```
//! use logseam::sync::{run_synchronized, LockKey};
//!
//! const STORE_LOCK: LockKey = LockKey::from_static("model-store");
//!
//! let merged = run_synchronized(&STORE_LOCK, || {
//!     // mutate shared state here
//!     3 + 4
//! });
//! assert_eq!(merged, 7);
//! ```

mod key;

#[cfg(not(target_arch = "wasm32"))]
mod registry;

#[cfg(target_arch = "wasm32")]
mod passthrough;

pub use key::LockKey;

#[cfg(not(target_arch = "wasm32"))]
pub use registry::LockRegistry;

#[cfg(target_arch = "wasm32")]
pub use passthrough::LockRegistry;

use std::sync::OnceLock;

/// Process-wide registry backing [`run_synchronized`].
static GLOBAL_REGISTRY: OnceLock<LockRegistry> = OnceLock::new();

/// The process-wide lock registry.
pub fn global_registry() -> &'static LockRegistry {
    GLOBAL_REGISTRY.get_or_init(LockRegistry::new)
}

/// Run `block` inside the named critical section of the process-wide
/// registry.
///
/// See [`LockRegistry::run_synchronized`] for the full contract.
pub fn run_synchronized<R, F>(lock: &LockKey, block: F) -> R
where
    F: FnOnce() -> R,
{
    global_registry().run_synchronized(lock, block)
}
