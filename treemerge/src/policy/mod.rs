//! Pure building blocks used by the engine's strategies.

mod combine;
mod lists;

pub(crate) use combine::{combine_numbers, join_texts};
pub(crate) use lists::{intersection, union};
