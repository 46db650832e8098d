//! Error types produced by the merge engine.

mod constructors;
mod types;

pub use types::{MergeError, Side};

/// Result of a merge: the freshly built value or the first failure.
pub type MergeOutcome = Result<crate::Value, MergeError>;

/// Convenience alias for fallible library operations.
pub type MergeResult<T> = Result<T, MergeError>;
