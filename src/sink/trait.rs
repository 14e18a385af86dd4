//! Sink trait definition.

use crate::error::SinkError;
use crate::record::Record;

/// Destination for log records.
///
/// Implementations receive fully built records and deliver them wherever
/// they see fit. Delivery problems are reported as [`SinkError`]; the
/// facade discards them, so a sink failure can never destabilize the
/// calling code. Implementations must not panic.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the same sink is shared by every
/// clone of the facade and may be called from any thread. The sink is
/// append-only from the facade's perspective: concurrent emits may
/// interleave but must not corrupt each other.
pub trait Sink: Send + Sync {
    /// Deliver one record to the destination.
    fn emit(&self, record: &Record<'_>) -> Result<(), SinkError>;
}
