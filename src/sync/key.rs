//! Lock identity keys.

use std::borrow::Cow;
use std::fmt;

/// Identity of a critical section.
///
/// Two calls synchronize against each other exactly when they use equal
/// keys. Keys are usually declared as constants next to the state they
/// protect:
///
/// ```
/// use logseam::sync::LockKey;
///
/// const REGISTRY_LOCK: LockKey = LockKey::from_static("model-registry");
///
/// assert_eq!(REGISTRY_LOCK.name(), "model-registry");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LockKey(Cow<'static, str>);

impl LockKey {
    /// Create a key from a static name.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create a key from a runtime-built name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// The name identifying this critical section.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for LockKey {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for LockKey {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
