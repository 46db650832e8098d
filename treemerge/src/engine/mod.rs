//! The recursive merge engine.
//!
//! [`merge`] walks two values in lock-step. Each step checks the depth and
//! budget limits, then dispatches on the configured [`crate::Strategy`] and
//! the pair's kinds. Composite pairs recurse per key or index; everything else
//! is settled by the list mode, the combine policy, or the conflict resolver.
//! The first failure aborts the whole call.

mod dispatch;
mod sequence;
mod validate;

use std::time::Instant;

use crate::report::ConflictRecord;
use crate::{MergeConfig, MergeError, MergeOutcome, MergeResult, Side, Value};

/// Merge `right` over `left` according to `config`.
///
/// Neither input is modified; the result is a freshly built tree.
///
/// # Errors
///
/// Returns [`MergeError::DepthExceeded`] when shared nesting goes past the
/// configured limit, [`MergeError::TypeMismatch`] when validation rejects an
/// input, [`MergeError::Conflict`] under the `error` resolver, budget errors
/// when a node or time budget runs out, and whatever a custom function
/// returns.
///
/// # Examples
///
/// ```rust
/// use treemerge::{MergeConfig, Value, merge};
///
/// let left = Value::mapping([("a", 1), ("b", 2)]);
/// let right = Value::mapping([("b", 3), ("c", 4)]);
/// let merged = merge(&left, &right, &MergeConfig::default())?;
/// assert_eq!(merged, Value::mapping([("a", 1), ("b", 3), ("c", 4)]));
/// # Ok::<_, treemerge::MergeError>(())
/// ```
pub fn merge(left: &Value, right: &Value, config: &MergeConfig) -> MergeOutcome {
    Merger::new(config, None).run(left, right)
}

/// Apply the configured input validation to one operand.
pub(crate) fn admit(value: &Value, side: Side, config: &MergeConfig) -> MergeResult<()> {
    if config.validate_types() {
        validate::check_input(value, side, config.supported_kinds())
    } else {
        Ok(())
    }
}

/// State carried through one merge call.
pub(crate) struct Merger<'cfg, 'log> {
    config: &'cfg MergeConfig,
    tracker: Option<&'log mut Vec<ConflictRecord>>,
    steps: usize,
    started: Option<Instant>,
}

impl<'cfg, 'log> Merger<'cfg, 'log> {
    pub(crate) fn new(
        config: &'cfg MergeConfig,
        tracker: Option<&'log mut Vec<ConflictRecord>>,
    ) -> Self {
        Self {
            config,
            tracker,
            steps: 0,
            started: config.time_budget().map(|_| Instant::now()),
        }
    }

    pub(crate) fn run(mut self, left: &Value, right: &Value) -> MergeOutcome {
        let config = self.config;
        tracing::trace!(
            strategy = ?config.strategy(),
            resolver = config.resolver().name(),
            list_mode = config.list_mode().name(),
            "merge started"
        );
        admit(left, Side::Left, config)?;
        admit(right, Side::Right, config)?;
        let outcome = self.merge_at(left, right, "", 0);
        if let Err(err) = &outcome {
            tracing::debug!(error = %err, steps = self.steps, "merge failed");
        }
        outcome
    }

    /// Enforce the depth limit and the optional budgets for one step.
    fn enter(&mut self, path: &str, depth: usize) -> MergeResult<()> {
        let config = self.config;
        if depth > config.max_depth() {
            return Err(MergeError::DepthExceeded {
                max_depth: config.max_depth(),
                path: path.to_owned(),
            });
        }
        self.steps += 1;
        if let Some(limit) = config.node_budget() {
            if self.steps > limit.get() {
                return Err(MergeError::BudgetExceeded { limit: limit.get() });
            }
        }
        if let (Some(budget), Some(started)) = (config.time_budget(), self.started) {
            if started.elapsed() > budget {
                return Err(MergeError::TimedOut { budget });
            }
        }
        Ok(())
    }

    fn record(&mut self, key: &str, left: &Value, right: &Value, resolved: &Value) {
        if let Some(tracker) = self.tracker.as_deref_mut() {
            tracker.push(ConflictRecord::new(key, left, right, resolved));
        }
    }

    const fn is_tracking(&self) -> bool {
        self.tracker.is_some()
    }
}

/// Path of a mapping entry below `parent`.
pub(crate) fn child_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

/// Path of a sequence item below `parent`.
pub(crate) fn child_index(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}
