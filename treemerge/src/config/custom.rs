//! Caller-supplied mergers keyed by kind pair.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::{Kind, MergeOutcome, Value};

/// Signature of a custom merger for one `(left kind, right kind)` pair.
pub type CustomMergeFn = Arc<dyn Fn(&Value, &Value) -> MergeOutcome + Send + Sync>;

/// Registry of custom mergers consulted by [`crate::Strategy::Custom`].
///
/// # Examples
///
/// ```rust
/// use treemerge::{CustomMergers, Kind, Value};
///
/// let mut mergers = CustomMergers::new();
/// mergers.insert(Kind::Text, Kind::Text, |left, right| {
///     Ok(Value::from(format!("{}/{}", left.as_text().unwrap_or(""), right.as_text().unwrap_or(""))))
/// });
/// assert!(mergers.get(Kind::Text, Kind::Text).is_some());
/// assert!(mergers.get(Kind::Text, Kind::Number).is_none());
/// ```
#[derive(Clone, Default)]
pub struct CustomMergers {
    entries: BTreeMap<(Kind, Kind), CustomMergeFn>,
}

impl CustomMergers {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register `merge` for the given kind pair, replacing any previous entry.
    pub fn insert<F>(&mut self, left: Kind, right: Kind, merge: F)
    where
        F: Fn(&Value, &Value) -> MergeOutcome + Send + Sync + 'static,
    {
        self.entries.insert((left, right), Arc::new(merge));
    }

    /// Look up the merger registered for a kind pair.
    #[must_use]
    pub fn get(&self, left: Kind, right: Kind) -> Option<&CustomMergeFn> {
        self.entries.get(&(left, right))
    }

    /// Number of registered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no merger is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&(Kind, Kind), &CustomMergeFn)> {
        self.entries.iter()
    }
}

impl fmt::Debug for CustomMergers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
