//! Key-level diff between two mappings.
//!
//! The diff compares raw inputs, not the merge output, and only looks at the
//! top level of each mapping: a nested change shows up as a modification of
//! its top-level key.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Mapping, MergeConfig, MergeOutcome, Value, merge};

/// Old and new value of a modified key.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValueChange {
    /// Value in the left mapping.
    pub from: Value,
    /// Value in the right mapping.
    pub to: Value,
}

/// Structural decomposition of the change from one mapping to another.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DiffResult {
    /// Keys present only on the right.
    pub added: Mapping,
    /// Keys present on both sides with different values.
    pub modified: BTreeMap<String, ValueChange>,
    /// Keys present only on the left.
    pub removed: Mapping,
}

impl DiffResult {
    /// Returns `true` if there are no changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.removed.is_empty()
    }

    /// Total number of changed keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.added.len() + self.modified.len() + self.removed.len()
    }

    /// Apply the additions and modifications on top of `base`.
    ///
    /// Removals are not applied. A non-mapping base is treated as empty.
    #[must_use]
    pub fn apply_to(&self, base: &Value) -> Value {
        let mut applied = base.as_mapping().cloned().unwrap_or_default();
        applied.extend(
            self.added
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        applied.extend(
            self.modified
                .iter()
                .map(|(key, change)| (key.clone(), change.to.clone())),
        );
        Value::Mapping(applied)
    }
}

/// Compute the diff from `left` to `right`.
///
/// Non-mapping operands produce an empty diff.
///
/// # Examples
///
/// ```rust
/// use treemerge::{Value, diff_values};
///
/// let old = Value::mapping([("a", 1), ("b", 2)]);
/// let new = Value::mapping([("b", 3), ("c", 4)]);
/// let diff = diff_values(&old, &new);
/// assert_eq!(diff.added.get("c"), Some(&Value::from(4)));
/// assert_eq!(diff.modified["b"].to, Value::from(3));
/// assert_eq!(diff.removed.get("a"), Some(&Value::from(1)));
/// ```
#[must_use]
pub fn diff_values(left: &Value, right: &Value) -> DiffResult {
    let (Some(old), Some(new)) = (left.as_mapping(), right.as_mapping()) else {
        return DiffResult::default();
    };
    let mut diff = DiffResult::default();
    for (key, old_value) in old {
        match new.get(key) {
            Some(new_value) if new_value != old_value => {
                diff.modified.insert(
                    key.clone(),
                    ValueChange {
                        from: old_value.clone(),
                        to: new_value.clone(),
                    },
                );
            }
            Some(_) => {}
            None => {
                diff.removed.insert(key.clone(), old_value.clone());
            }
        }
    }
    for (key, new_value) in new {
        if !old.contains_key(key) {
            diff.added.insert(key.clone(), new_value.clone());
        }
    }
    diff
}

/// Merge and diff the raw inputs in one call.
#[must_use]
pub fn diff_merge(left: &Value, right: &Value, config: &MergeConfig) -> (MergeOutcome, DiffResult) {
    let diff = diff_values(left, right);
    (merge(left, right, config), diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identical_mappings_have_no_diff() {
        let state = Value::mapping([("a", Value::from(1)), ("b", Value::from("hello"))]);
        let diff = diff_values(&state, &state);
        assert!(diff.is_empty());
    }

    #[rstest]
    fn empty_to_populated_only_adds() {
        let new = Value::mapping([("x", 42), ("y", 7)]);
        let diff = diff_values(&Value::empty_mapping(), &new);
        assert_eq!(diff.len(), 2);
        assert_eq!(diff.added.len(), 2);
        assert!(diff.removed.is_empty());
    }

    #[rstest]
    fn nested_changes_surface_at_the_top_level_key() {
        let old = Value::mapping([("db", Value::mapping([("port", 5432)]))]);
        let new = Value::mapping([("db", Value::mapping([("port", 6543)]))]);
        let diff = diff_values(&old, &new);
        assert_eq!(diff.modified.len(), 1);
        assert_eq!(
            diff.modified.get("db").map(|change| &change.from),
            Some(&Value::mapping([("port", 5432)]))
        );
    }

    #[rstest]
    #[case::scalar_left(Value::from(1), Value::empty_mapping())]
    #[case::scalar_right(Value::mapping([("a", 1)]), Value::from("x"))]
    #[case::sequences(Value::sequence([1]), Value::sequence([2]))]
    fn non_mappings_degenerate_to_empty(#[case] left: Value, #[case] right: Value) {
        assert!(diff_values(&left, &right).is_empty());
    }

    #[rstest]
    fn apply_ignores_removals() {
        let old = Value::mapping([("a", 1), ("b", 2)]);
        let new = Value::mapping([("b", 3)]);
        let applied = diff_values(&old, &new).apply_to(&old);
        assert_eq!(applied, Value::mapping([("a", 1), ("b", 3)]));
    }

    #[rstest]
    fn diff_merge_compares_inputs_not_output() {
        let left = Value::mapping([("a", 1)]);
        let right = Value::mapping([("b", 2)]);
        let (outcome, diff) = diff_merge(&left, &right, &MergeConfig::default());
        assert_eq!(outcome, Ok(Value::mapping([("a", 1), ("b", 2)])));
        assert_eq!(diff.removed.get("a"), Some(&Value::from(1)));
        assert_eq!(diff.added.get("b"), Some(&Value::from(2)));
    }
}
