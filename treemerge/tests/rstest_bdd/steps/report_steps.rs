//! Steps exercising the conflict log, diff, rollback, and safe merge.

use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{then, when};
use treemerge::{diff_merge, merge_with_conflicts, reversible_merge, safe_merge};

use super::merge_steps::inputs;
use crate::fixtures::MergeContext;

#[when("the documents are merged with conflict tracking")]
fn merge_with_tracking(merge_context: &MergeContext) -> Result<()> {
    let (left, right, config) = inputs(merge_context)?;
    let (outcome, conflicts) = merge_with_conflicts(&left, &right, &config);
    merge_context.outcome.set(outcome);
    merge_context.conflicts.set(conflicts);
    Ok(())
}

#[when("the documents are safely merged with validation")]
fn merge_safely(merge_context: &MergeContext) -> Result<()> {
    let (left, right, config) = inputs(merge_context)?;
    let merged = safe_merge(&left, &right, &config.with_validation(true));
    merge_context.outcome.set(Ok(merged));
    Ok(())
}

#[when("the documents are merged reversibly")]
fn merge_reversibly(merge_context: &MergeContext) -> Result<()> {
    let (left, right, config) = inputs(merge_context)?;
    let (merged, rollback) = reversible_merge(&left, &right, &config)?;
    merge_context.outcome.set(Ok(merged));
    merge_context.rollback.set(rollback);
    Ok(())
}

#[when("the documents are diffed")]
fn diff_documents(merge_context: &MergeContext) -> Result<()> {
    let (left, right, config) = inputs(merge_context)?;
    let (outcome, diff) = diff_merge(&left, &right, &config);
    merge_context.outcome.set(outcome);
    merge_context.diff.set(diff);
    Ok(())
}

#[then("{count:usize} conflicts are recorded")]
fn conflicts_recorded(merge_context: &MergeContext, count: usize) -> Result<()> {
    let recorded = merge_context
        .conflicts
        .with_ref(Vec::len)
        .ok_or_else(|| anyhow!("conflict log missing"))?;
    ensure!(recorded == count, "recorded {recorded} conflicts; expected {count}");
    Ok(())
}

#[then("the conflict log names {key}")]
fn conflict_log_names(merge_context: &MergeContext, key: String) -> Result<()> {
    let found = merge_context
        .conflicts
        .with_ref(|conflicts| conflicts.iter().any(|record| record.key == key))
        .ok_or_else(|| anyhow!("conflict log missing"))?;
    ensure!(found, "no conflict recorded for {key}");
    Ok(())
}

#[then("the result equals the left document")]
fn result_is_left(merge_context: &MergeContext) -> Result<()> {
    let merged = merge_context
        .outcome
        .get()
        .ok_or_else(|| anyhow!("merge outcome missing"))??;
    let left = merge_context
        .left
        .get()
        .ok_or_else(|| anyhow!("left document missing"))?;
    ensure!(merged == left, "result {merged:?} differs from the left document");
    Ok(())
}

#[then("the rollback restores the left document")]
fn rollback_restores(merge_context: &MergeContext) -> Result<()> {
    let restored = merge_context
        .rollback
        .with_ref(|rollback| rollback.restore())
        .ok_or_else(|| anyhow!("rollback missing"))?;
    let left = merge_context
        .left
        .get()
        .ok_or_else(|| anyhow!("left document missing"))?;
    ensure!(restored == left);
    Ok(())
}

#[then("the diff modifies {count:usize} keys and adds none")]
fn diff_modifies(merge_context: &MergeContext, count: usize) -> Result<()> {
    let (modified, added) = merge_context
        .diff
        .with_ref(|diff| (diff.modified.len(), diff.added.len()))
        .ok_or_else(|| anyhow!("diff missing"))?;
    ensure!(modified == count && added == 0, "modified {modified}, added {added}");
    Ok(())
}
