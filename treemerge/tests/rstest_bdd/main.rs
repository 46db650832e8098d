//! `rstest-bdd` behavioural suite for `treemerge`.
//!
//! Feature files live under `tests/features`; [`scenarios`] binds them to the
//! shared [`fixtures::MergeContext`] and the step registry in [`steps`].

mod fixtures;
mod scenarios;
mod steps;
