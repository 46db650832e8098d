//! Merge paired with a rollback to the original base.

use std::fmt;
use std::sync::Arc;

use crate::{MergeConfig, MergeResult, Value, merge};

/// Zero-argument handle yielding the base value of a merge.
///
/// The snapshot is shared, so cloning a `Rollback` is cheap and every call
/// returns an independent copy of the original value.
#[derive(Clone)]
pub struct Rollback {
    snapshot: Arc<Value>,
}

impl Rollback {
    fn new(snapshot: Value) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// Produce the original left operand.
    #[must_use]
    pub fn restore(&self) -> Value {
        Value::clone(&self.snapshot)
    }

    /// Convert into a plain closure.
    pub fn into_fn(self) -> impl Fn() -> Value + Send + Sync + 'static {
        move || self.restore()
    }
}

impl fmt::Debug for Rollback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rollback")
            .field("nodes", &self.snapshot.node_count())
            .finish()
    }
}

/// Merge `right` over `left` and return a rollback to `left`.
///
/// # Errors
///
/// Propagates any [`crate::MergeError`] from [`merge`].
///
/// # Examples
///
/// ```rust
/// use treemerge::{MergeConfig, Value, reversible_merge};
///
/// let left = Value::mapping([("mode", "safe")]);
/// let right = Value::mapping([("mode", "fast")]);
/// let (merged, rollback) = reversible_merge(&left, &right, &MergeConfig::default())?;
/// assert_eq!(merged, right);
/// assert_eq!(rollback.restore(), left);
/// # Ok::<_, treemerge::MergeError>(())
/// ```
pub fn reversible_merge(
    left: &Value,
    right: &Value,
    config: &MergeConfig,
) -> MergeResult<(Value, Rollback)> {
    let merged = merge(left, right, config)?;
    Ok((merged, Rollback::new(left.clone())))
}
