//! Provenance-tagged layers folded in precedence order.
//!
//! Configuration documents usually arrive as a stack: baked-in defaults,
//! files, environment overrides, and command-line flags. [`MergeComposer`]
//! collects such a stack and [`compose`] folds it with the merge engine,
//! lowest precedence first. [`compose_traced`] additionally attributes every
//! conflict to the layer that introduced the winning candidate, and
//! [`compose_with_fallback`] skips layers that fail instead of aborting.
//!
//! # Example
//!
//! ```rust
//! use treemerge::{MergeComposer, MergeConfig, Value};
//!
//! let mut composer = MergeComposer::new();
//! composer.push_defaults(Value::mapping([("port", 3000)]));
//! composer.push_cli(Value::mapping([("port", 4000)]));
//!
//! let merged = composer.compose(&MergeConfig::default())?;
//! assert_eq!(merged.get("port"), Some(&Value::from(4000)));
//! # Ok::<_, treemerge::MergeError>(())
//! ```

mod composer;
mod layer;

pub use composer::{MergeComposer, compose, compose_traced, compose_with_fallback};
pub use layer::{LayerSource, MergeLayer};
