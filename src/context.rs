//! Context tags for log attribution.

use std::fmt;

/// Identifies the logical origin of a log call.
///
/// A context tag is attribution metadata only: sinks may use it for
/// filtering or routing, but it never influences what the facade does.
/// Components typically declare one as a constant:
///
/// ```
/// use logseam::context::ContextTag;
///
/// const CONTEXT: ContextTag = ContextTag::new("VersionStore");
///
/// assert_eq!(CONTEXT.name(), "VersionStore");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextTag(&'static str);

impl ContextTag {
    /// Create a tag from a component name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The component name this tag carries.
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ContextTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl From<&'static str> for ContextTag {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}
