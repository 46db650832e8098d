//! Conflict log collected while merging.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::Merger;
use crate::{MergeConfig, MergeOutcome, Value};

/// One key where both inputs held different values.
///
/// `left` and `right` are the raw operands; `resolved` is what the merge
/// kept for the key.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConflictRecord {
    /// Dotted path of the key.
    pub key: String,
    /// Value from the left input.
    pub left: Value,
    /// Value from the right input.
    pub right: Value,
    /// Value chosen by the merge.
    pub resolved: Value,
    /// When the conflict was resolved.
    pub timestamp: DateTime<Utc>,
    /// Label of the layer that supplied `right`, when merging layers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
}

impl ConflictRecord {
    pub(crate) fn new(key: &str, left: &Value, right: &Value, resolved: &Value) -> Self {
        Self {
            key: key.to_owned(),
            left: left.clone(),
            right: right.clone(),
            resolved: resolved.clone(),
            timestamp: Utc::now(),
            layer: None,
        }
    }
}

/// Merge with a conflict tracker attached.
///
/// The log is returned even when the merge fails, holding the conflicts
/// resolved before the failure.
///
/// # Examples
///
/// ```rust
/// use treemerge::{MergeConfig, Value, merge_with_conflicts};
///
/// let left = Value::mapping([("a", 1), ("b", 2)]);
/// let right = Value::mapping([("b", 3)]);
/// let (outcome, conflicts) = merge_with_conflicts(&left, &right, &MergeConfig::default());
/// assert!(outcome.is_ok());
/// assert_eq!(conflicts.len(), 1);
/// assert_eq!(conflicts[0].key, "b");
/// assert_eq!(conflicts[0].resolved, Value::from(3));
/// ```
#[must_use]
pub fn merge_with_conflicts(
    left: &Value,
    right: &Value,
    config: &MergeConfig,
) -> (MergeOutcome, Vec<ConflictRecord>) {
    let mut conflicts = Vec::new();
    let outcome = Merger::new(config, Some(&mut conflicts)).run(left, right);
    (outcome, conflicts)
}
