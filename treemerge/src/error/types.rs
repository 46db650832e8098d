//! Primary error enum for merge failures.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::{Kind, Value};

/// Which input of a merge an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The base (left-hand) operand.
    Left,
    /// The overlay (right-hand) operand.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Errors that terminate a merge.
///
/// Every failure is returned as data; the engine never panics on bad input
/// and never returns a partially merged tree.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum MergeError {
    /// The inputs nest deeper than the configured limit.
    #[error("maximum merge depth {max_depth} exceeded at '{path}'")]
    DepthExceeded {
        /// Configured limit that was exceeded.
        max_depth: usize,
        /// Dotted path of the first node beyond the limit.
        path: String,
    },

    /// An input contains a value outside the accepted kinds.
    #[error("{side} input holds an unsupported {kind} at '{path}'")]
    TypeMismatch {
        /// Input carrying the rejected node.
        side: Side,
        /// Kind of the rejected node.
        kind: Kind,
        /// Dotted path of the rejected node.
        path: String,
    },

    /// Two differing values met under the `error` conflict resolver.
    #[error("conflicting values at '{key}': {left:?} vs {right:?}")]
    Conflict {
        /// Dotted path of the conflicting entry (empty at the root).
        key: String,
        /// Value held by the left input.
        left: Box<Value>,
        /// Value held by the right input.
        right: Box<Value>,
    },

    /// The merge visited more nodes than the configured budget allows.
    #[error("merge node budget of {limit} exhausted")]
    BudgetExceeded {
        /// Configured node budget.
        limit: usize,
    },

    /// The merge ran past its wall-clock budget.
    #[error("merge exceeded its time budget of {budget:?}")]
    TimedOut {
        /// Configured time budget.
        budget: Duration,
    },

    /// A user-supplied merger, resolver, or list function refused its input.
    #[error("custom merge function failed: {message}")]
    Custom {
        /// Explanation supplied by the custom function.
        message: String,
    },
}
