//! No-operation sink implementation.

use crate::error::SinkError;
use crate::record::Record;
use crate::sink::Sink;

/// A sink that discards all records.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
/// - Silent operation modes
///
/// # Example
///
/// ```
/// use logseam::facade::LogFacade;
/// use logseam::sink::NoOpSink;
/// use std::sync::Arc;
///
/// let log = LogFacade::new(Arc::new(NoOpSink));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl Sink for NoOpSink {
    #[inline]
    fn emit(&self, _record: &Record<'_>) -> Result<(), SinkError> {
        // Intentionally empty - discard all records
        Ok(())
    }
}
