//! Leveled logging facade.
//!
//! The facade is the single logging entry point for calling code. It knows
//! nothing about destinations beyond the [`Sink`] it was built with, and it
//! guarantees that no logging call can fail or panic out into the caller:
//! sink failures are contained here.
//!
//! Debug and trace messages are lazily built: callers pass a producer
//! closure instead of a string, and the closure runs at most once, only
//! when the corresponding level is enabled.

use crate::config::FacadeConfig;
use crate::context::ContextTag;
use crate::record::Record;
use crate::severity::Severity;
use crate::sink::{ConsoleSink, Sink};
use std::error::Error;
use std::sync::Arc;

/// Uniform logging contract for application components.
///
/// Cloning a facade is cheap; clones share the underlying sink. Components
/// typically hold a clone and declare a [`ContextTag`] constant for
/// attribution:
///
/// ```
/// use logseam::context::ContextTag;
/// use logseam::facade::LogFacade;
/// use logseam::sink::MemorySink;
/// use std::sync::Arc;
///
/// const CONTEXT: ContextTag = ContextTag::new("VersionStore");
///
/// let sink = Arc::new(MemorySink::new());
/// let log = LogFacade::new(sink.clone());
///
/// log.debug(|| Some(format!("loaded {} versions", 12)), CONTEXT);
/// assert_eq!(sink.records()[0].message, "loaded 12 versions");
/// ```
#[derive(Clone)]
pub struct LogFacade {
    sink: Arc<dyn Sink>,
    config: FacadeConfig,
}

impl LogFacade {
    /// Create a facade over the given sink with default configuration.
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self::with_config(sink, FacadeConfig::default())
    }

    /// Create a facade over the given sink with explicit configuration.
    pub fn with_config(sink: Arc<dyn Sink>, config: FacadeConfig) -> Self {
        Self { sink, config }
    }

    /// Create a facade that writes to the process console streams.
    pub fn console() -> Self {
        Self::new(Arc::new(ConsoleSink::new()))
    }

    /// The configuration this facade was built with.
    pub fn config(&self) -> FacadeConfig {
        self.config
    }

    /// Log a message and error detail at error severity.
    ///
    /// Always emits exactly one record. Never fails: a sink that rejects
    /// the record is ignored.
    pub fn error(&self, message: &str, error: &dyn Error, context: ContextTag) {
        self.emit(Record::with_error(
            Severity::Error,
            context,
            message,
            error,
        ));
    }

    /// Log a message and error detail at warning severity.
    ///
    /// Same contract as [`error`](Self::error).
    pub fn warning(&self, message: &str, error: &dyn Error, context: ContextTag) {
        self.emit(Record::with_error(
            Severity::Warning,
            context,
            message,
            error,
        ));
    }

    /// Log a lazily built message at debug severity.
    ///
    /// The producer is invoked exactly once. If it yields `None` or an
    /// empty string, nothing is emitted.
    pub fn debug<F>(&self, message: F, context: ContextTag)
    where
        F: FnOnce() -> Option<String>,
    {
        self.emit_lazy(Severity::Debug, message, context);
    }

    /// Log a lazily built message at trace severity.
    ///
    /// Trace output is suppressed by default; when it is disabled the
    /// producer is not invoked at all, so trace calls cost nothing beyond
    /// the enablement check. Enable trace via
    /// [`FacadeConfig::with_trace_enabled`](crate::config::FacadeConfig::with_trace_enabled).
    pub fn trace<F>(&self, message: F, context: ContextTag)
    where
        F: FnOnce() -> Option<String>,
    {
        if !self.config.trace_enabled() {
            return;
        }
        self.emit_lazy(Severity::Trace, message, context);
    }

    fn emit_lazy<F>(&self, severity: Severity, message: F, context: ContextTag)
    where
        F: FnOnce() -> Option<String>,
    {
        let message = match message() {
            Some(message) => message,
            None => return,
        };
        if message.is_empty() {
            return;
        }
        self.emit(Record::new(severity, context, &message));
    }

    /// Deliver a record, containing any sink failure.
    fn emit(&self, record: Record<'_>) {
        // Logging is best-effort: a failing sink must never surface to
        // the caller.
        let _ = self.sink.emit(&record);
    }
}
