//! Log output destinations.
//!
//! This module provides the sink abstraction that decouples the facade from
//! where log text actually goes. Callers only ever talk to the
//! [`LogFacade`](crate::facade::LogFacade); the facade hands each record to
//! whichever sink it was constructed with.
//!
//! # Architecture
//!
//! - [`Sink`] trait: the destination interface
//! - [`ConsoleSink`]: writes human-readable lines to the process streams
//! - [`TracingSink`]: adapter that delegates to the `tracing` crate
//! - [`NoOpSink`]: silent sink for testing and benchmarking
//! - [`MemorySink`]: captures records in memory for inspection
//!
//! # Usage
//!
//! ```
//! use logseam::context::ContextTag;
//! use logseam::facade::LogFacade;
//! use logseam::sink::MemorySink;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let log = LogFacade::new(sink.clone());
//!
//! log.debug(|| Some("cache primed".to_string()), ContextTag::new("Cache"));
//! assert_eq!(sink.len(), 1);
//! ```

mod console;
mod memory;
mod noop;
mod r#trait;
mod tracing_adapter;

pub use console::ConsoleSink;
pub use memory::{CapturedRecord, MemorySink};
pub use noop::NoOpSink;
pub use r#trait::Sink;
pub use tracing_adapter::TracingSink;
