//! Error types for log sinks.

use std::io;
use thiserror::Error;

/// Failure to deliver a record to a sink.
///
/// Sink failures never cross the facade boundary: the facade catches and
/// discards them so that logging stays best-effort for the caller. The
/// type exists so that [`Sink`](crate::sink::Sink) implementations have a
/// uniform way to report problems to the facade.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying stream rejected the write.
    #[error("failed to write log record: {0}")]
    Write(#[from] io::Error),

    /// The sink can no longer accept records.
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}
