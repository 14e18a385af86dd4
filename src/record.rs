//! Log records passed from the facade to sinks.

use crate::context::ContextTag;
use crate::severity::Severity;
use std::error::Error;

/// A single log event.
///
/// Records are built by the facade and handed to a
/// [`Sink`](crate::sink::Sink) by reference. The message is borrowed from
/// the call that produced it; the error detail, when present, is the
/// rendered cause chain of the error value attached to the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    severity: Severity,
    context: ContextTag,
    message: &'a str,
    error: Option<String>,
}

impl<'a> Record<'a> {
    /// Create a record with no attached error.
    pub fn new(severity: Severity, context: ContextTag, message: &'a str) -> Self {
        Self {
            severity,
            context,
            message,
            error: None,
        }
    }

    /// Create a record carrying an error's rendered cause chain.
    pub fn with_error(
        severity: Severity,
        context: ContextTag,
        message: &'a str,
        error: &dyn Error,
    ) -> Self {
        Self {
            severity,
            context,
            message,
            error: Some(render_error_chain(error)),
        }
    }

    /// Severity of this record.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Context tag attributing the record to its origin.
    pub fn context(&self) -> ContextTag {
        self.context
    }

    /// The log message.
    pub fn message(&self) -> &str {
        self.message
    }

    /// Rendered error chain, if an error was attached.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Render an error and its `source()` chain as a single line.
///
/// Each cause is appended with `: `, outermost first, so an error wrapping
/// two causes renders as `"outer: middle: inner"`.
fn render_error_chain(error: &dyn Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
