//! Side channels that observe a merge without changing its result.
//!
//! - [`merge_with_conflicts`] collects a [`ConflictRecord`] per differing key.
//! - [`diff_merge`] pairs the merge with a [`DiffResult`] of the raw inputs.
//! - [`reversible_merge`] returns a [`Rollback`] yielding the original base.
//! - [`safe_merge`] falls back to the base on failure, logging a warning.

mod conflicts;
mod diff;
mod reversible;
mod safe;

pub use conflicts::{ConflictRecord, merge_with_conflicts};
pub use diff::{DiffResult, ValueChange, diff_merge, diff_values};
pub use reversible::{Rollback, reversible_merge};
pub use safe::safe_merge;
