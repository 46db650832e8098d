//! Merge that never fails.

use crate::{MergeConfig, Value, merge};

/// Merge `right` over `left`, returning `left` unchanged if the merge fails.
///
/// The failure is reported as a `tracing` warning. This is the only entry
/// point that swallows merge errors.
///
/// # Examples
///
/// ```rust
/// use treemerge::{MergeConfig, Value, safe_merge};
///
/// let left = Value::mapping([("a", 1)]);
/// let invalid = Value::from(f64::NAN);
/// let config = MergeConfig::default().with_validation(true);
/// assert_eq!(safe_merge(&left, &invalid, &config), left);
/// ```
#[must_use]
pub fn safe_merge(left: &Value, right: &Value, config: &MergeConfig) -> Value {
    merge(left, right, config).unwrap_or_else(|err| {
        tracing::warn!(
            error = %err,
            strategy = ?config.strategy(),
            "merge failed; keeping the left operand"
        );
        left.clone()
    })
}
