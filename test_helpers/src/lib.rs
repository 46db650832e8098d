//! Test helpers shared across crates.
//!
//! This crate provides value builders for merge fixtures, helpers for writing
//! documents to disk, and `figment::Jail` wrappers for settings tests.

pub mod figment;
pub mod files;
pub mod values;
