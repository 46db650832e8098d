//! Strategy dispatch and mapping recursion.

use crate::policy::{combine_numbers, join_texts};
use crate::{ConflictResolver, Mapping, MergeError, MergeOutcome, MergeResult, Strategy, Value};

use super::{Merger, child_key};

impl Merger<'_, '_> {
    /// Merge one pair of values found at `path`, `depth` levels below the root.
    pub(super) fn merge_at(
        &mut self,
        left: &Value,
        right: &Value,
        path: &str,
        depth: usize,
    ) -> MergeOutcome {
        self.enter(path, depth)?;
        let config = self.config;
        match config.strategy() {
            Strategy::Replace => Ok(right.clone()),
            Strategy::Shallow => Ok(shallow(left, right)),
            Strategy::Custom => match config.custom_mergers().get(left.kind(), right.kind()) {
                Some(custom) => custom(left, right),
                None => self.deep(left, right, path, depth),
            },
            Strategy::Deep | Strategy::Combine => self.deep(left, right, path, depth),
        }
    }

    fn deep(&mut self, left: &Value, right: &Value, path: &str, depth: usize) -> MergeOutcome {
        let config = self.config;
        let combining = config.strategy() == Strategy::Combine;
        match (left, right) {
            (Value::Null, present) | (present, Value::Null) => Ok(present.clone()),
            _ if left.is_empty_mapping() => Ok(right.clone()),
            _ if right.is_empty_mapping() => Ok(left.clone()),
            (Value::Mapping(left_map), Value::Mapping(right_map)) => self
                .merge_mappings(left_map, right_map, path, depth)
                .map(Value::Mapping),
            (Value::Sequence(_), Value::Sequence(_)) if left == right => Ok(left.clone()),
            (Value::Sequence(left_items), Value::Sequence(right_items)) => self
                .merge_sequences(left_items, right_items, path, depth)
                .map(Value::Sequence),
            (Value::Number(left_number), Value::Number(right_number)) if combining => {
                Ok(Value::Number(combine_numbers(
                    *left_number,
                    *right_number,
                    config.combine_policy().numbers,
                )))
            }
            (Value::Text(left_text), Value::Text(right_text)) if combining => Ok(Value::Text(
                join_texts(left_text, right_text, &config.combine_policy().separator),
            )),
            _ if left == right => Ok(left.clone()),
            _ => self.resolve(left, right, path, depth),
        }
    }

    /// Merge two mappings key by key.
    ///
    /// One-sided keys are copied; shared keys recurse one level deeper. With a
    /// tracker attached, every shared key whose raw values differ is logged
    /// after it has been resolved.
    pub(super) fn merge_mappings(
        &mut self,
        left: &Mapping,
        right: &Mapping,
        path: &str,
        depth: usize,
    ) -> MergeResult<Mapping> {
        let mut merged = Mapping::new();
        for (key, left_value) in left {
            let Some(right_value) = right.get(key) else {
                merged.insert(key.clone(), left_value.clone());
                continue;
            };
            let key_path = child_key(path, key);
            let resolved = self.merge_at(left_value, right_value, &key_path, depth + 1)?;
            if self.is_tracking() && left_value != right_value {
                self.record(&key_path, left_value, right_value, &resolved);
            }
            merged.insert(key.clone(), resolved);
        }
        for (key, right_value) in right {
            if !left.contains_key(key) {
                merged.insert(key.clone(), right_value.clone());
            }
        }
        Ok(merged)
    }

    fn resolve(&mut self, left: &Value, right: &Value, path: &str, depth: usize) -> MergeOutcome {
        let config = self.config;
        match config.resolver() {
            ConflictResolver::Left => Ok(left.clone()),
            ConflictResolver::Right => Ok(right.clone()),
            ConflictResolver::Error => Err(MergeError::conflict(path, left, right)),
            ConflictResolver::Custom(resolve) => resolve(path, left, right),
            ConflictResolver::Merge => match (left, right) {
                (Value::Mapping(left_map), Value::Mapping(right_map)) => self
                    .merge_mappings(left_map, right_map, path, depth)
                    .map(Value::Mapping),
                (Value::Sequence(left_items), Value::Sequence(right_items)) => Ok(Value::Sequence(
                    left_items.iter().chain(right_items).cloned().collect(),
                )),
                (Value::Text(left_text), Value::Text(right_text)) => Ok(Value::Text(join_texts(
                    left_text,
                    right_text,
                    &config.combine_policy().separator,
                ))),
                (Value::Number(left_number), Value::Number(right_number)) => Ok(Value::Number(
                    combine_numbers(*left_number, *right_number, config.combine_policy().numbers),
                )),
                _ => Ok(right.clone()),
            },
        }
    }
}

/// Single-level merge: mapping keys union with right winning, sequences
/// concatenate, anything else takes the right operand.
fn shallow(left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Mapping(left_map), Value::Mapping(right_map)) => {
            let mut merged = left_map.clone();
            merged.extend(
                right_map
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone())),
            );
            Value::Mapping(merged)
        }
        (Value::Sequence(left_items), Value::Sequence(right_items)) => {
            Value::Sequence(left_items.iter().chain(right_items).cloned().collect())
        }
        _ if right.is_empty_mapping() => left.clone(),
        _ if left.is_empty_mapping() => right.clone(),
        _ => right.clone(),
    }
}
