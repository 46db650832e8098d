//! Folding many values into one.
//!
//! [`merge_many`] is a plain left fold. [`merge_many_parallel`] partitions
//! the input into contiguous chunks, folds each chunk on its own scoped
//! thread, then folds the chunk results in order; it agrees with
//! [`merge_many`] whenever the configured merge is associative. The deep
//! strategy with the `left` or `right` resolver is associative under the
//! `union` list mode, and under `append` or `prepend` as long as no two
//! partial results carry equal sequences at the same key.

mod parallel;

pub use parallel::merge_many_parallel;

use crate::engine::admit;
use crate::{MergeConfig, MergeOutcome, Side, Value, merge};

/// Left-fold `merge` across `values` in order.
///
/// An empty slice yields an empty mapping; a single value is returned
/// unchanged.
///
/// # Errors
///
/// Returns the first [`crate::MergeError`] produced by any step.
///
/// # Examples
///
/// ```rust
/// use treemerge::{MergeConfig, Value, merge_many};
///
/// let layers = [
///     Value::mapping([("a", 1)]),
///     Value::mapping([("b", 2)]),
///     Value::mapping([("a", 3)]),
/// ];
/// let merged = merge_many(&layers, &MergeConfig::default())?;
/// assert_eq!(merged, Value::mapping([("a", 3), ("b", 2)]));
/// assert_eq!(merge_many(&[], &MergeConfig::default())?, Value::empty_mapping());
/// # Ok::<_, treemerge::MergeError>(())
/// ```
pub fn merge_many(values: &[Value], config: &MergeConfig) -> MergeOutcome {
    let Some((first, rest)) = values.split_first() else {
        return Ok(Value::empty_mapping());
    };
    rest.iter().enumerate().try_fold(first.clone(), |acc, (offset, next)| {
        tracing::trace!(step = offset + 1, "folding value");
        merge(&acc, next, config)
    })
}

/// Left-fold `merge` across `values`, skipping any value whose merge fails.
///
/// With validation enabled, each value is checked before it joins the fold,
/// so an invalid value is skipped even when it comes first. Each skipped
/// value is reported as a `tracing` warning naming its index. Use this when
/// one bad input should not discard the rest.
///
/// # Examples
///
/// ```rust
/// use treemerge::{ConflictResolver, MergeConfig, Value, merge_many_with_fallback};
///
/// let config = MergeConfig::default().with_resolver(ConflictResolver::Error);
/// let layers = [
///     Value::mapping([("a", 1)]),
///     Value::mapping([("a", 2)]),
///     Value::mapping([("b", 3)]),
/// ];
/// let merged = merge_many_with_fallback(&layers, &config);
/// assert_eq!(merged, Value::mapping([("a", 1), ("b", 3)]));
/// ```
#[must_use]
pub fn merge_many_with_fallback(values: &[Value], config: &MergeConfig) -> Value {
    fold_with_fallback(values, config, |acc, next, _| merge(acc, next, config))
}

/// Fold `values` with `step`, skipping values that fail validation or whose
/// step fails. `step` receives the accumulator, the next value and its index.
pub(crate) fn fold_with_fallback<'v>(
    values: impl IntoIterator<Item = &'v Value>,
    config: &MergeConfig,
    mut step: impl FnMut(&Value, &Value, usize) -> MergeOutcome,
) -> Value {
    let mut folded: Option<Value> = None;
    for (index, next) in values.into_iter().enumerate() {
        if let Err(err) = admit(next, Side::Right, config) {
            tracing::warn!(index, error = %err, "skipping value that failed validation");
            continue;
        }
        folded = Some(match folded {
            None => next.clone(),
            Some(acc) => step(&acc, next, index).unwrap_or_else(|err| {
                tracing::warn!(index, error = %err, "skipping value that failed to merge");
                acc
            }),
        });
    }
    folded.unwrap_or_else(Value::empty_mapping)
}

#[cfg(test)]
mod tests;
