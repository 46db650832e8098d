//! Set-like sequence merges that need no recursion.

use crate::Value;

/// Distinct items of `left` then `right`, in first-seen order.
pub(crate) fn union(left: &[Value], right: &[Value]) -> Vec<Value> {
    let mut merged: Vec<Value> = Vec::with_capacity(left.len() + right.len());
    for item in left.iter().chain(right) {
        if !merged.contains(item) {
            merged.push(item.clone());
        }
    }
    merged
}

/// Items of `left` that also occur in `right`, in `left` order.
pub(crate) fn intersection(left: &[Value], right: &[Value]) -> Vec<Value> {
    left.iter()
        .filter(|item| right.contains(item))
        .cloned()
        .collect()
}
