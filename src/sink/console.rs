//! Console sink implementation.

use crate::error::SinkError;
use crate::record::Record;
use crate::severity::Severity;
use crate::sink::Sink;
use std::io::{self, Write};

/// Sink that writes human-readable lines to the process streams.
///
/// Error and warning records go to standard error, debug and trace
/// records to standard output, mirroring the usual console conventions.
/// Each record becomes one line of the form:
///
/// ```text
/// ERROR [VersionStore] merge failed: version not found: v17
/// ```
///
/// The stream handle is locked for the duration of a single write, so
/// concurrent emits interleave per line rather than mid-line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a new console sink.
    pub fn new() -> Self {
        Self
    }

    fn render(record: &Record<'_>) -> String {
        match record.error() {
            Some(error) => format!(
                "{} [{}] {}: {}",
                record.severity(),
                record.context(),
                record.message(),
                error
            ),
            None => format!(
                "{} [{}] {}",
                record.severity(),
                record.context(),
                record.message()
            ),
        }
    }
}

impl Sink for ConsoleSink {
    fn emit(&self, record: &Record<'_>) -> Result<(), SinkError> {
        let line = Self::render(record);
        match record.severity() {
            Severity::Error | Severity::Warning => {
                let mut stream = io::stderr().lock();
                writeln!(stream, "{}", line)?;
            }
            Severity::Debug | Severity::Trace => {
                let mut stream = io::stdout().lock();
                writeln!(stream, "{}", line)?;
            }
        }
        Ok(())
    }
}
