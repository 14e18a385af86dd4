//! Logseam - logging facade and synchronized execution for model-management components
//!
//! This library provides the platform glue shared by the rest of the model
//! management stack: a uniform leveled logging contract that hides the log
//! destination from calling code, and a keyed critical-section helper whose
//! blocking behavior is selected per target.
//!
//! # High-Level API
//!
//! Most callers construct one [`facade::LogFacade`] and clone it into each
//! component:
//!
//! ```
//! use logseam::context::ContextTag;
//! use logseam::facade::LogFacade;
//! use logseam::sync::{run_synchronized, LockKey};
//!
//! const CONTEXT: ContextTag = ContextTag::new("Startup");
//! const STATE_LOCK: LockKey = LockKey::from_static("startup-state");
//!
//! let log = LogFacade::console();
//! log.debug(|| Some("configuration loaded".to_string()), CONTEXT);
//!
//! let ready = run_synchronized(&STATE_LOCK, || true);
//! assert!(ready);
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod facade;
pub mod record;
pub mod severity;
pub mod sink;
pub mod sync;

/// Version of the logseam library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
