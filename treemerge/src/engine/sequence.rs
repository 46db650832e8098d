//! Sequence merging under the configured list mode.

use crate::policy::{intersection, union};
use crate::{ListMode, MergeResult, Value};

use super::{Merger, child_index};

impl Merger<'_, '_> {
    pub(super) fn merge_sequences(
        &mut self,
        left: &[Value],
        right: &[Value],
        path: &str,
        depth: usize,
    ) -> MergeResult<Vec<Value>> {
        let config = self.config;
        match config.list_mode() {
            ListMode::Append => Ok(left.iter().chain(right).cloned().collect()),
            ListMode::Prepend => Ok(right.iter().chain(left).cloned().collect()),
            ListMode::Union => Ok(union(left, right)),
            ListMode::Intersection => Ok(intersection(left, right)),
            ListMode::Left => Ok(left.to_vec()),
            ListMode::Right => Ok(right.to_vec()),
            ListMode::ByIndex => self.merge_by_index(left, right, path, depth),
            ListMode::Custom(merge_lists) => merge_lists(left, right),
        }
    }

    /// Pair items by position; positions present on both sides recurse.
    fn merge_by_index(
        &mut self,
        left: &[Value],
        right: &[Value],
        path: &str,
        depth: usize,
    ) -> MergeResult<Vec<Value>> {
        let len = left.len().max(right.len());
        let mut merged = Vec::with_capacity(len);
        for index in 0..len {
            let item = match (left.get(index), right.get(index)) {
                (Some(left_item), Some(right_item)) => {
                    self.merge_at(left_item, right_item, &child_index(path, index), depth + 1)?
                }
                (Some(only), None) | (None, Some(only)) => only.clone(),
                (None, None) => break,
            };
            merged.push(item);
        }
        Ok(merged)
    }
}
