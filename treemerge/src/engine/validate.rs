//! Input validation performed before a merge when enabled.

use crate::{KindSet, MergeError, MergeResult, Side, Value};

use super::{child_index, child_key};

/// Check one operand: every node's kind must be in `kinds` and every number
/// must be finite. The first offending node is reported with its path.
pub(super) fn check_input(value: &Value, side: Side, kinds: KindSet) -> MergeResult<()> {
    check_node(value, side, kinds, "")
}

fn check_node(value: &Value, side: Side, kinds: KindSet, path: &str) -> MergeResult<()> {
    let finite = match value {
        Value::Number(number) => number.is_finite(),
        _ => true,
    };
    if !finite || !kinds.contains(value.kind()) {
        return Err(MergeError::TypeMismatch {
            side,
            kind: value.kind(),
            path: path.to_owned(),
        });
    }
    match value {
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(index, item)| check_node(item, side, kinds, &child_index(path, index))),
        Value::Mapping(map) => map
            .iter()
            .try_for_each(|(key, item)| check_node(item, side, kinds, &child_key(path, key))),
        _ => Ok(()),
    }
}
