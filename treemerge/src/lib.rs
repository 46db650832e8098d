//! Structural deep merge of nested data trees.
//!
//! The crate combines two [`Value`] trees (mappings, sequences, and scalars)
//! into a fresh tree. How the trees combine is described by an immutable
//! [`MergeConfig`]: a top-level [`Strategy`], a [`ConflictResolver`] for
//! differing leaves, a [`ListMode`] for sequences, and limits that keep
//! runaway inputs in check. Failures are returned as [`MergeError`] values;
//! only [`safe_merge`] and [`merge_many_with_fallback`] turn them into
//! fallbacks.
//!
//! Around the engine sit reporters that observe a merge without changing it
//! ([`merge_with_conflicts`], [`diff_merge`], [`reversible_merge`]), folds
//! over many values ([`merge_many`], [`merge_many_parallel`]), a bounded
//! [`MergeCache`], provenance-tagged layer composition ([`MergeComposer`]),
//! and [`MergeSettings`] for loading the named options with `figment`.
//!
//! ```rust
//! use treemerge::{ListMode, MergeConfig, Value, merge};
//!
//! let defaults = Value::mapping([
//!     ("server", Value::mapping([("host", "0.0.0.0"), ("port", "80")])),
//!     ("features", Value::sequence(["auth"])),
//! ]);
//! let overrides = Value::mapping([
//!     ("server", Value::mapping([("port", "8080")])),
//!     ("features", Value::sequence(["auth", "metrics"])),
//! ]);
//!
//! let config = MergeConfig::default().with_list_mode(ListMode::Union);
//! let merged = merge(&defaults, &overrides, &config)?;
//! assert_eq!(merged.pointer("server.host"), Some(&Value::from("0.0.0.0")));
//! assert_eq!(merged.pointer("server.port"), Some(&Value::from("8080")));
//! assert_eq!(merged.get("features"), Some(&Value::sequence(["auth", "metrics"])));
//! # Ok::<_, treemerge::MergeError>(())
//! ```

mod batch;
mod cache;
mod config;
mod engine;
mod error;
mod layers;
mod policy;
mod report;
pub mod settings;
pub mod value;

pub use batch::{merge_many, merge_many_parallel, merge_many_with_fallback};
pub use cache::{CacheStats, CachedMerger, MergeCache};
pub use config::{
    CombinePolicy, ConflictResolver, CustomMergeFn, CustomMergers, DEFAULT_MAX_DEPTH,
    ListMergeFn, ListMode, MergeConfig, NumberCombine, ResolverFn, Strategy,
};
pub use engine::merge;
pub use error::{MergeError, MergeOutcome, MergeResult, Side};
pub use layers::{
    LayerSource, MergeComposer, MergeLayer, compose, compose_traced, compose_with_fallback,
};
pub use report::{
    ConflictRecord, DiffResult, Rollback, ValueChange, diff_merge, diff_values,
    merge_with_conflicts, reversible_merge, safe_merge,
};
pub use settings::{MergeSettings, SettingsError};
pub use value::{Kind, KindSet, Mapping, Number, Value, ValueConversionError};
