//! Tracing library adapter implementation.

use crate::error::SinkError;
use crate::record::Record;
use crate::severity::Severity;
use crate::sink::Sink;

/// Sink that delegates to the `tracing` crate.
///
/// This adapter bridges records onto the `tracing` ecosystem, so that
/// applications already running a subscriber (with file output, filtering,
/// spans) can route facade output through it without the calling code
/// knowing about `tracing` at all. The context tag is forwarded as a
/// field; the error chain, when present, is appended to the message.
///
/// # Example
///
/// ```ignore
/// use logseam::facade::LogFacade;
/// use logseam::sink::TracingSink;
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already initialized
/// let log = LogFacade::new(Arc::new(TracingSink::new()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn emit(&self, record: &Record<'_>) -> Result<(), SinkError> {
        let message = match record.error() {
            Some(error) => format!("{}: {}", record.message(), error),
            None => record.message().to_string(),
        };
        let context = record.context().name();
        match record.severity() {
            Severity::Trace => tracing::trace!(context, "{}", message),
            Severity::Debug => tracing::debug!(context, "{}", message),
            Severity::Warning => tracing::warn!(context, "{}", message),
            Severity::Error => tracing::error!(context, "{}", message),
        }
        Ok(())
    }
}
