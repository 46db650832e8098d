//! Shared fixtures for the behavioural scenarios.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use treemerge::{ConflictRecord, DiffResult, MergeConfig, MergeOutcome, Rollback, Value};

/// State passed between the steps of one scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct MergeContext {
    pub left: Slot<Value>,
    pub right: Slot<Value>,
    pub config: Slot<MergeConfig>,
    pub outcome: Slot<MergeOutcome>,
    pub conflicts: Slot<Vec<ConflictRecord>>,
    pub diff: Slot<DiffResult>,
    pub rollback: Slot<Rollback>,
}

#[fixture]
pub fn merge_context() -> MergeContext {
    MergeContext::default()
}
