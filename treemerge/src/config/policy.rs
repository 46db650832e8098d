//! Named merge behaviours.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{MergeOutcome, MergeResult, Value};

/// Signature of a caller-supplied conflict resolver.
///
/// Receives the dotted path of the conflict and both operands.
pub type ResolverFn = Arc<dyn Fn(&str, &Value, &Value) -> MergeOutcome + Send + Sync>;

/// Signature of a caller-supplied list merge.
pub type ListMergeFn = Arc<dyn Fn(&[Value], &[Value]) -> MergeResult<Vec<Value>> + Send + Sync>;

/// Top-level merge behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Recurse into mappings, apply the list mode to sequences and the
    /// resolver to everything else.
    #[default]
    Deep,
    /// Union top-level mapping keys (right wins), concatenate sequences,
    /// otherwise take the right operand.
    Shallow,
    /// Always take the right operand.
    Replace,
    /// Like [`Strategy::Deep`], but same-kind numbers and texts are combined
    /// according to the [`CombinePolicy`].
    Combine,
    /// Consult the configured custom mergers for each kind pair, falling back
    /// to [`Strategy::Deep`].
    Custom,
}

/// Policy deciding the outcome of a scalar or mixed-kind conflict.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictResolver {
    /// Keep the left operand.
    Left,
    /// Keep the right operand.
    #[default]
    Right,
    /// Best-effort same-kind combination, right otherwise.
    Merge,
    /// Fail with [`crate::MergeError::Conflict`].
    Error,
    /// Delegate to a caller-supplied function.
    #[serde(skip)]
    Custom(ResolverFn),
}

impl ConflictResolver {
    /// Wrap a closure as a custom resolver.
    #[must_use]
    pub fn custom<F>(resolve: F) -> Self
    where
        F: Fn(&str, &Value, &Value) -> MergeOutcome + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(resolve))
    }

    /// Name used in logs and settings files.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Merge => "merge",
            Self::Error => "error",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for ConflictResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How two sequences are combined under the deep family of strategies.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListMode {
    /// Left items followed by right items, duplicates kept.
    #[default]
    Append,
    /// Right items followed by left items, duplicates kept.
    Prepend,
    /// Distinct items in first-seen order, left before right.
    Union,
    /// Left items that also occur in the right sequence, in left order.
    Intersection,
    /// Keep the left sequence.
    Left,
    /// Keep the right sequence.
    Right,
    /// Merge items pairwise by position.
    ByIndex,
    /// Delegate to a caller-supplied function.
    #[serde(skip)]
    Custom(ListMergeFn),
}

impl ListMode {
    /// Wrap a closure as a custom list merge.
    #[must_use]
    pub fn custom<F>(merge: F) -> Self
    where
        F: Fn(&[Value], &[Value]) -> MergeResult<Vec<Value>> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(merge))
    }

    /// Name used in logs and settings files.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Prepend => "prepend",
            Self::Union => "union",
            Self::Intersection => "intersection",
            Self::Left => "left",
            Self::Right => "right",
            Self::ByIndex => "by-index",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arithmetic used when combining two numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberCombine {
    /// Add the operands.
    #[default]
    Sum,
    /// Keep the larger operand.
    Max,
    /// Keep the smaller operand.
    Min,
}

/// Scalar combination rules shared by [`Strategy::Combine`] and
/// [`ConflictResolver::Merge`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CombinePolicy {
    /// How two numbers combine.
    pub numbers: NumberCombine,
    /// Inserted between two texts when they are concatenated.
    pub separator: String,
}

impl Default for CombinePolicy {
    fn default() -> Self {
        Self {
            numbers: NumberCombine::Sum,
            separator: String::from(" "),
        }
    }
}
