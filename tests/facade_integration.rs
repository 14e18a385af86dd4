//! Integration tests for the logging facade.
//!
//! These tests exercise the facade through the public API only, covering:
//! - Record emission for each severity
//! - Error cause-chain rendering
//! - Lazy producer invocation and empty-message suppression
//! - Trace suppression and runtime enablement
//! - Containment of sink failures

use logseam::config::FacadeConfig;
use logseam::context::ContextTag;
use logseam::error::SinkError;
use logseam::facade::LogFacade;
use logseam::record::Record;
use logseam::severity::Severity;
use logseam::sink::{MemorySink, NoOpSink, Sink};
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// =============================================================================
// Test Helpers
// =============================================================================

const CONTEXT: ContextTag = ContextTag::new("Integration");

/// Innermost cause for chain-rendering tests.
#[derive(Debug)]
struct RootCause;

impl fmt::Display for RootCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connection reset")
    }
}

impl Error for RootCause {}

/// Error wrapping a cause, as callers typically hand to the facade.
#[derive(Debug)]
struct SyncFailed {
    source: RootCause,
}

impl fmt::Display for SyncFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "synchronization failed")
    }
}

impl Error for SyncFailed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Sink that rejects every record but counts the attempts.
struct RejectingSink {
    attempts: AtomicUsize,
}

impl RejectingSink {
    fn new() -> Self {
        Self {
            attempts: AtomicUsize::new(0),
        }
    }
}

impl Sink for RejectingSink {
    fn emit(&self, _record: &Record<'_>) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(SinkError::Unavailable("always rejecting".to_string()))
    }
}

// =============================================================================
// Integration Tests
// =============================================================================

#[test]
fn test_error_record_carries_message_and_chain() {
    let sink = Arc::new(MemorySink::new());
    let log = LogFacade::new(sink.clone());
    let failure = SyncFailed { source: RootCause };

    log.error("could not push version", &failure, CONTEXT);

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Error);
    assert_eq!(records[0].message, "could not push version");
    assert_eq!(
        records[0].error.as_deref(),
        Some("synchronization failed: connection reset")
    );
}

#[test]
fn test_warning_and_error_are_distinct_severities() {
    let sink = Arc::new(MemorySink::new());
    let log = LogFacade::new(sink.clone());

    log.warning("slow response", &RootCause, CONTEXT);
    log.error("gave up", &RootCause, CONTEXT);

    let records = sink.records();
    assert_eq!(records[0].severity, Severity::Warning);
    assert_eq!(records[1].severity, Severity::Error);
}

#[test]
fn test_debug_scenario_empty_then_ready() {
    let sink = Arc::new(MemorySink::new());
    let log = LogFacade::new(sink.clone());

    log.debug(|| Some(String::new()), CONTEXT);
    assert!(sink.is_empty(), "Empty message should produce no output");

    log.debug(|| Some("ready".to_string()), CONTEXT);
    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Debug);
    assert_eq!(records[0].message, "ready");
}

#[test]
fn test_trace_default_suppression_end_to_end() {
    let sink = Arc::new(MemorySink::new());
    let log = LogFacade::new(sink.clone());
    let produced = AtomicUsize::new(0);

    log.trace(
        || {
            produced.fetch_add(1, Ordering::SeqCst);
            Some("never built".to_string())
        },
        CONTEXT,
    );

    assert_eq!(produced.load(Ordering::SeqCst), 0);
    assert!(sink.is_empty());
}

#[test]
fn test_trace_can_be_enabled_at_construction() {
    let sink = Arc::new(MemorySink::new());
    let config = FacadeConfig::new().with_trace_enabled(true);
    let log = LogFacade::with_config(sink.clone(), config);

    log.trace(|| Some("lock acquired".to_string()), CONTEXT);

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Trace);
}

#[test]
fn test_rejecting_sink_never_escapes_and_still_sees_records() {
    let sink = Arc::new(RejectingSink::new());
    let log = LogFacade::new(sink.clone());

    log.error("boom", &RootCause, CONTEXT);
    log.warning("boom", &RootCause, CONTEXT);
    log.debug(|| Some("boom".to_string()), CONTEXT);

    // All three calls returned normally; all three reached the sink.
    assert_eq!(sink.attempts.load(Ordering::SeqCst), 3);
}

#[test]
fn test_noop_sink_accepts_full_severity_sweep() {
    let log = LogFacade::with_config(
        Arc::new(NoOpSink),
        FacadeConfig::new().with_trace_enabled(true),
    );

    log.error("e", &RootCause, CONTEXT);
    log.warning("w", &RootCause, CONTEXT);
    log.debug(|| Some("d".to_string()), CONTEXT);
    log.trace(|| Some("t".to_string()), CONTEXT);
}

#[test]
fn test_facade_shared_across_threads() {
    let sink = Arc::new(MemorySink::new());
    let log = LogFacade::new(sink.clone());

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let log = log.clone();
            std::thread::spawn(move || {
                log.debug(|| Some(format!("worker {}", worker)), CONTEXT);
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    assert_eq!(sink.len(), 4);
}
