//! In-memory capture sink implementation.

use crate::context::ContextTag;
use crate::error::SinkError;
use crate::record::Record;
use crate::severity::Severity;
use crate::sink::Sink;
use std::sync::Mutex;

/// Owned copy of an emitted record, as stored by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    /// Severity of the captured record
    pub severity: Severity,
    /// Context tag the record was attributed to
    pub context: ContextTag,
    /// The log message
    pub message: String,
    /// Rendered error chain, if an error was attached
    pub error: Option<String>,
}

/// Sink that captures records in memory.
///
/// Intended for tests that assert on what was logged, and for embedders
/// that want to surface recent log output through their own UI. Records
/// accumulate until [`clear`](MemorySink::clear) is called.
///
/// # Example
///
/// ```
/// use logseam::context::ContextTag;
/// use logseam::facade::LogFacade;
/// use logseam::sink::MemorySink;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let log = LogFacade::new(sink.clone());
///
/// log.debug(|| Some("loaded 3 models".to_string()), ContextTag::new("Loader"));
///
/// let records = sink.records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].message, "loaded 3 models");
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemorySink {
    /// Create an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far, in emission order.
    pub fn records(&self) -> Vec<CapturedRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(_) => Vec::new(),
        }
    }

    /// Number of captured records.
    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    /// Whether nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard all captured records.
    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl Sink for MemorySink {
    fn emit(&self, record: &Record<'_>) -> Result<(), SinkError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| SinkError::Unavailable("capture buffer poisoned".to_string()))?;
        records.push(CapturedRecord {
            severity: record.severity(),
            context: record.context(),
            message: record.message().to_string(),
            error: record.error().map(String::from),
        });
        Ok(())
    }
}
