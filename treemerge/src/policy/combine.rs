//! Scalar combination rules.

use crate::{Number, NumberCombine};

/// Combine two numbers according to `mode`.
pub(crate) fn combine_numbers(left: Number, right: Number, mode: NumberCombine) -> Number {
    match mode {
        NumberCombine::Sum => left.sum(right),
        NumberCombine::Max => left.max(right),
        NumberCombine::Min => left.min(right),
    }
}

/// Concatenate two texts around `separator`. Empty operands are not padded.
pub(crate) fn join_texts(left: &str, right: &str, separator: &str) -> String {
    if left.is_empty() {
        return right.to_owned();
    }
    if right.is_empty() {
        return left.to_owned();
    }
    let mut joined = String::with_capacity(left.len() + separator.len() + right.len());
    joined.push_str(left);
    joined.push_str(separator);
    joined.push_str(right);
    joined
}
