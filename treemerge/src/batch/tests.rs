//! Unit tests for folding.

use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use rstest::{fixture, rstest};

use super::{merge_many, merge_many_parallel, merge_many_with_fallback};
use crate::{ConflictResolver, ListMode, MergeConfig, MergeError, Value};

#[fixture]
fn layered() -> Vec<Value> {
    (0..25_i64)
        .map(|n| {
            Value::mapping([
                (format!("key{}", n % 7), Value::from(n)),
                (String::from("tags"), Value::sequence([n])),
            ])
        })
        .collect()
}

#[rstest]
fn empty_input_yields_empty_mapping() {
    assert_eq!(merge_many(&[], &MergeConfig::default()), Ok(Value::empty_mapping()));
}

#[rstest]
#[case::scalar(Value::from(5))]
#[case::sequence(Value::sequence(["a"]))]
#[case::mapping(Value::mapping([("a", 1)]))]
fn single_input_is_returned_unchanged(#[case] value: Value) {
    assert_eq!(merge_many(&[value.clone()], &MergeConfig::default()), Ok(value));
}

#[rstest]
fn fold_stops_at_first_failure() {
    let config = MergeConfig::default().with_resolver(ConflictResolver::Error);
    let values = [
        Value::mapping([("a", 1)]),
        Value::mapping([("a", 2)]),
        Value::mapping([("a", 3)]),
    ];
    let err = merge_many(&values, &config).expect_err("second value conflicts");
    assert_eq!(err, MergeError::conflict("a", &Value::from(1), &Value::from(2)));
}

#[rstest]
fn fallback_skips_only_failing_values() {
    let config = MergeConfig::default().with_resolver(ConflictResolver::Error);
    let values = [
        Value::mapping([("a", 1)]),
        Value::mapping([("a", 2), ("b", 1)]),
        Value::mapping([("c", 3)]),
    ];
    assert_eq!(
        merge_many_with_fallback(&values, &config),
        Value::mapping([("a", 1), ("c", 3)])
    );
    assert_eq!(merge_many_with_fallback(&[], &config), Value::empty_mapping());
}

#[rstest]
fn fallback_skips_an_invalid_first_value() {
    let config = MergeConfig::default().with_validation(true);
    let values = [
        Value::mapping([("ratio", f64::NAN)]),
        Value::mapping([("a", 1)]),
        Value::mapping([("b", 2)]),
    ];
    assert_eq!(
        merge_many_with_fallback(&values, &config),
        Value::mapping([("a", 1), ("b", 2)])
    );
    assert_eq!(
        merge_many_with_fallback(&[Value::from(f64::INFINITY)], &config),
        Value::empty_mapping()
    );
}

#[rstest]
#[case::chunk_of_one(1)]
#[case::uneven_chunks(4)]
#[case::single_chunk(100)]
fn parallel_fold_matches_sequential_fold(layered: Vec<Value>, #[case] chunk: usize) {
    let config = MergeConfig::default();
    let chunk = NonZeroUsize::new(chunk).expect("non-zero chunk");
    assert_eq!(
        merge_many_parallel(&layered, &config, chunk),
        merge_many(&layered, &config)
    );
}

#[rstest]
fn parallel_fold_matches_sequential_union(layered: Vec<Value>) {
    let config = MergeConfig::default().with_list_mode(ListMode::Union);
    let chunk = NonZeroUsize::new(3).expect("non-zero chunk");
    let merged = merge_many_parallel(&layered, &config, chunk).expect("union merge succeeds");
    assert_eq!(Ok(merged.clone()), merge_many(&layered, &config));
    assert_eq!(merged.get("tags"), Some(&Value::sequence(0..25_i64)));
}

#[rstest]
fn parallel_fold_reports_chunk_failures() {
    let config = MergeConfig::default().with_resolver(ConflictResolver::Error);
    let values: Vec<Value> = (0..6).map(|n| Value::mapping([("same", n)])).collect();
    let chunk = NonZeroUsize::new(2).expect("non-zero chunk");
    let err = merge_many_parallel(&values, &config, chunk).expect_err("chunks conflict");
    assert!(matches!(err, MergeError::Conflict { ref key, .. } if key == "same"));
}

#[rstest]
fn parallel_fold_bounds_its_workers() {
    let seen = Arc::new(Mutex::new(HashSet::new()));
    let recorder = Arc::clone(&seen);
    let config = MergeConfig::default().with_resolver_fn(move |_, _, right| {
        recorder.lock().insert(thread::current().id());
        Ok(right.clone())
    });
    let values: Vec<Value> = (0..2000).map(|n| Value::mapping([("n", n)])).collect();
    let chunk = NonZeroUsize::new(2).expect("non-zero chunk");
    let merged = merge_many_parallel(&values, &config, chunk).expect("fold succeeds");
    assert_eq!(merged, Value::mapping([("n", 1999)]));
    let cores = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    assert!(seen.lock().len() <= cores + 1);
}
