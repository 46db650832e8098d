//! Algebraic properties of the merge engine and its reporters.

use std::num::NonZeroUsize;

use anyhow::{Result, ensure};
use rstest::{fixture, rstest};
use test_helpers::values::{layered, nested, service_defaults, service_overrides, wide};
use treemerge::{
    ConflictResolver, ListMode, MergeConfig, MergeError, Value, diff_merge, merge, merge_many,
    merge_many_parallel, safe_merge,
};

#[fixture]
fn documents() -> Vec<Value> {
    vec![
        Value::Null,
        Value::from(-3),
        Value::from("text"),
        Value::sequence([Value::from(1), Value::Null, Value::from("x")]),
        wide(5),
        nested(6, "leaf"),
        service_defaults(),
        service_overrides(),
    ]
}

#[rstest]
fn self_merge_is_idempotent(documents: Vec<Value>) -> Result<()> {
    let config = MergeConfig::default();
    for value in documents {
        let merged = merge(&value, &value, &config)?;
        ensure!(merged == value, "self-merge changed {value:?} into {merged:?}");
    }
    Ok(())
}

#[rstest]
fn empty_mapping_is_a_right_identity(documents: Vec<Value>) -> Result<()> {
    let config = MergeConfig::deep();
    let empty = Value::empty_mapping();
    for value in documents.into_iter().filter(|value| value.as_mapping().is_some()) {
        ensure!(merge(&value, &empty, &config)? == value, "identity failed for {value:?}");
    }
    Ok(())
}

#[rstest]
fn fold_identities_hold(documents: Vec<Value>) -> Result<()> {
    let config = MergeConfig::default();
    ensure!(merge_many(&[], &config)? == Value::empty_mapping());
    for value in documents {
        ensure!(merge_many(std::slice::from_ref(&value), &config)? == value);
    }
    Ok(())
}

#[rstest]
#[case::ints(Value::from(1), Value::from(2))]
#[case::text_and_bool(Value::from("on"), Value::from(true))]
#[case::sequence_and_scalar(Value::sequence([1]), Value::from(1))]
fn resolvers_are_mirror_images(#[case] a: Value, #[case] b: Value) -> Result<()> {
    let left = MergeConfig::default().with_resolver(ConflictResolver::Left);
    let right = MergeConfig::default().with_resolver(ConflictResolver::Right);
    ensure!(merge(&a, &b, &left)? == merge(&b, &a, &right)?);
    Ok(())
}

#[rstest]
fn null_never_overwrites_a_present_value() -> Result<()> {
    let merged = merge(
        &Value::mapping([("x", 1)]),
        &Value::mapping([("x", Value::Null)]),
        &MergeConfig::deep(),
    )?;
    ensure!(merged == Value::mapping([("x", 1)]));
    Ok(())
}

#[rstest]
#[case::at_limit(5, true)]
#[case::beyond_limit(6, false)]
fn depth_is_bounded(#[case] depth: usize, #[case] succeeds: bool) -> Result<()> {
    let limit = NonZeroUsize::new(5).expect("non-zero limit");
    let config = MergeConfig::default().with_max_depth(limit);
    let outcome = merge(&nested(depth, 1), &nested(depth, 2), &config);
    match outcome {
        Ok(_) => ensure!(succeeds, "depth {depth} should fail"),
        Err(MergeError::DepthExceeded { max_depth, .. }) => {
            ensure!(!succeeds && max_depth == 5, "depth {depth} should succeed");
        }
        Err(other) => anyhow::bail!("unexpected error: {other}"),
    }
    Ok(())
}

#[rstest]
#[case::overrides(service_defaults(), service_overrides())]
#[case::disjoint(wide(3), Value::mapping([("extra", true)]))]
#[case::nested(nested(3, 1), nested(3, 2))]
fn diff_round_trip_reproduces_replaced_keys(#[case] a: Value, #[case] b: Value) -> Result<()> {
    let (outcome, diff) = diff_merge(&a, &b, &MergeConfig::replace());
    ensure!(outcome? == b, "replace must return the right operand");
    let applied = diff.apply_to(&a);
    for (key, value) in b.as_mapping().into_iter().flatten() {
        ensure!(
            applied.get(key) == Some(value),
            "key {key} not reproduced by the diff"
        );
    }
    Ok(())
}

#[rstest]
fn concrete_scenarios() -> Result<()> {
    let deep = MergeConfig::default();
    ensure!(
        merge(
            &Value::mapping([("a", 1), ("b", 2)]),
            &Value::mapping([("b", 3), ("c", 4)]),
            &deep
        )? == Value::mapping([("a", 1), ("b", 3), ("c", 4)])
    );
    ensure!(
        merge(
            &Value::mapping([("items", Value::sequence([1, 2, 3]))]),
            &Value::mapping([("items", Value::sequence([4, 5, 6]))]),
            &deep
        )? == Value::mapping([("items", Value::sequence([1, 2, 3, 4, 5, 6]))])
    );
    ensure!(
        merge(
            &Value::mapping([("tags", Value::sequence(["x", "y"]))]),
            &Value::mapping([("tags", Value::sequence(["y", "z"]))]),
            &deep.clone().with_list_mode(ListMode::Union)
        )? == Value::mapping([("tags", Value::sequence(["x", "y", "z"]))])
    );
    let conflict = merge(
        &Value::mapping([("v", "left")]),
        &Value::mapping([("v", "right")]),
        &deep.clone().with_resolver(ConflictResolver::Error),
    );
    ensure!(
        conflict
            == Err(MergeError::conflict(
                "v",
                &Value::from("left"),
                &Value::from("right")
            ))
    );
    let base = Value::mapping([("a", 1)]);
    ensure!(
        safe_merge(
            &base,
            &Value::mapping([("a", f64::NAN)]),
            &deep.with_validation(true)
        ) == base
    );
    Ok(())
}

#[rstest]
#[case::two(2)]
#[case::seven(7)]
fn parallel_fold_agrees_with_sequential_fold(#[case] chunk: usize) -> Result<()> {
    let values = layered(40);
    let config = MergeConfig::default();
    let chunk = NonZeroUsize::new(chunk).expect("non-zero chunk");
    let parallel = merge_many_parallel(&values, &config, chunk)?;
    ensure!(parallel == merge_many(&values, &config)?);
    ensure!(parallel.get("counter") == Some(&Value::from(39)));
    ensure!(parallel.as_mapping().map(|map| map.len()) == Some(41));
    Ok(())
}
