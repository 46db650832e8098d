//! Steps that build inputs, run merges, and inspect the outcome.

use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use test_helpers::files::parse_json;
use test_helpers::values::{service_defaults, service_overrides};
use treemerge::{ConflictResolver, ListMode, MergeConfig, MergeError, Value, merge};

use crate::fixtures::MergeContext;

#[given("the service defaults as the left document")]
fn defaults_on_the_left(merge_context: &MergeContext) {
    merge_context.left.set(service_defaults());
}

#[given("the service defaults as the right document")]
fn defaults_on_the_right(merge_context: &MergeContext) {
    merge_context.right.set(service_defaults());
}

#[given("the service overrides as the left document")]
fn overrides_on_the_left(merge_context: &MergeContext) {
    merge_context.left.set(service_overrides());
}

#[given("the service overrides as the right document")]
fn overrides_on_the_right(merge_context: &MergeContext) {
    merge_context.right.set(service_overrides());
}

#[given("a right document holding a non-finite number")]
fn non_finite_on_the_right(merge_context: &MergeContext) {
    merge_context
        .right
        .set(Value::mapping([("server", Value::mapping([("port", f64::NAN)]))]));
}

#[given("the error resolver")]
fn error_resolver(merge_context: &MergeContext) {
    merge_context
        .config
        .set(MergeConfig::default().with_resolver(ConflictResolver::Error));
}

#[given("the union list mode")]
fn union_list_mode(merge_context: &MergeContext) {
    merge_context
        .config
        .set(MergeConfig::default().with_list_mode(ListMode::Union));
}

pub(crate) fn inputs(merge_context: &MergeContext) -> Result<(Value, Value, MergeConfig)> {
    let left = merge_context
        .left
        .get()
        .ok_or_else(|| anyhow!("left document missing"))?;
    let right = merge_context
        .right
        .get()
        .ok_or_else(|| anyhow!("right document missing"))?;
    let config = merge_context.config.get().unwrap_or_default();
    Ok((left, right, config))
}

#[when("the documents are merged")]
fn merge_documents(merge_context: &MergeContext) -> Result<()> {
    let (left, right, config) = inputs(merge_context)?;
    merge_context.outcome.set(merge(&left, &right, &config));
    Ok(())
}

#[then("the merged value at {path} is {expected}")]
fn merged_value_at(merge_context: &MergeContext, path: String, expected: String) -> Result<()> {
    let merged = merge_context
        .outcome
        .get()
        .ok_or_else(|| anyhow!("merge outcome missing"))??;
    let expected_value = parse_json(&expected)?;
    let actual = merged
        .pointer(&path)
        .ok_or_else(|| anyhow!("no value at {path}"))?;
    ensure!(
        *actual == expected_value,
        "value at {path} is {actual:?}; expected {expected_value:?}"
    );
    Ok(())
}

#[then("the merge fails with a conflict at {key}")]
fn merge_fails_with_conflict(merge_context: &MergeContext, key: String) -> Result<()> {
    let outcome = merge_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("merge outcome missing"))?;
    let err = outcome
        .err()
        .ok_or_else(|| anyhow!("merge unexpectedly succeeded"))?;
    ensure!(
        matches!(err, MergeError::Conflict { .. }) && err.key() == Some(key.as_str()),
        "unexpected error: {err}"
    );
    Ok(())
}
