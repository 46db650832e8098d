//! Layer accumulation and folding.

use std::borrow::Cow;

use camino::Utf8PathBuf;

use crate::batch::fold_with_fallback;
use crate::report::{ConflictRecord, merge_with_conflicts};
use crate::{MergeConfig, MergeOutcome, Value, merge};

use super::{LayerSource, MergeLayer};

/// Builder that accumulates [`MergeLayer`] instances in precedence order.
#[derive(Debug, Default)]
pub struct MergeComposer {
    layers: Vec<MergeLayer<'static>>,
}

impl MergeComposer {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Create a composer with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: Vec::with_capacity(capacity),
        }
    }

    /// Push a defaults layer.
    pub fn push_defaults(&mut self, value: Value) {
        self.push_layer(MergeLayer::defaults(Cow::Owned(value)));
    }

    /// Push a file layer.
    pub fn push_file(&mut self, value: Value, path: Utf8PathBuf) {
        self.push_layer(MergeLayer::file(Cow::Owned(value), path));
    }

    /// Push an environment layer.
    pub fn push_environment(&mut self, value: Value) {
        self.push_layer(MergeLayer::environment(Cow::Owned(value)));
    }

    /// Push a CLI layer.
    pub fn push_cli(&mut self, value: Value) {
        self.push_layer(MergeLayer::cli(Cow::Owned(value)));
    }

    /// Push a layer with a caller-defined name.
    pub fn push_named(&mut self, name: impl Into<String>, value: Value) {
        self.push_layer(MergeLayer::new(
            LayerSource::Named(name.into()),
            Cow::Owned(value),
        ));
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: MergeLayer<'static>) {
        self.layers.push(layer);
    }

    /// Number of accumulated layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` when no layer has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Fold the accumulated layers without consuming the composer.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::MergeError`] raised while folding.
    pub fn compose(&self, config: &MergeConfig) -> MergeOutcome {
        compose(&self.layers, config)
    }

    /// Consume the composer and return the accumulated layers.
    #[must_use]
    pub fn layers(self) -> Vec<MergeLayer<'static>> {
        self.layers
    }
}

impl IntoIterator for MergeComposer {
    type Item = MergeLayer<'static>;
    type IntoIter = std::vec::IntoIter<MergeLayer<'static>>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}

/// Fold `layers` in order, later layers taking precedence.
///
/// Follows the same identities as [`crate::merge_many`]: no layers give an
/// empty mapping and a single layer is returned unchanged.
///
/// # Errors
///
/// Returns the first [`crate::MergeError`] raised while folding.
pub fn compose(layers: &[MergeLayer<'_>], config: &MergeConfig) -> MergeOutcome {
    let Some((first, rest)) = layers.split_first() else {
        return Ok(Value::empty_mapping());
    };
    rest.iter().try_fold(first.value().clone(), |acc, layer| {
        tracing::debug!(source = %layer.source(), "applying layer");
        merge(&acc, layer.value(), config)
    })
}

/// Fold `layers` in order and collect conflicts tagged with their layer.
///
/// Each record's `layer` names the source of the right-hand candidate. On
/// failure the conflicts gathered so far are still returned.
#[must_use]
pub fn compose_traced(
    layers: &[MergeLayer<'_>],
    config: &MergeConfig,
) -> (MergeOutcome, Vec<ConflictRecord>) {
    let mut conflicts = Vec::new();
    let Some((first, rest)) = layers.split_first() else {
        return (Ok(Value::empty_mapping()), conflicts);
    };
    let mut acc = first.value().clone();
    for layer in rest {
        let label = layer.source().to_string();
        tracing::debug!(source = %label, "applying layer");
        let (outcome, records) = merge_with_conflicts(&acc, layer.value(), config);
        conflicts.extend(records.into_iter().map(|mut record| {
            record.layer = Some(label.clone());
            record
        }));
        match outcome {
            Ok(merged) => acc = merged,
            Err(err) => return (Err(err), conflicts),
        }
    }
    (Ok(acc), conflicts)
}

/// Fold `layers` in order, skipping layers that fail validation or fail to
/// merge, and collect the conflicts of the layers that were applied.
///
/// The conflict log describes exactly the returned value: records from a
/// skipped layer are discarded along with its merge.
#[must_use]
pub fn compose_with_fallback(
    layers: &[MergeLayer<'_>],
    config: &MergeConfig,
) -> (Value, Vec<ConflictRecord>) {
    let mut conflicts = Vec::new();
    let merged = fold_with_fallback(layers.iter().map(MergeLayer::value), config, |acc, next, index| {
        let label = layers.get(index).map(|layer| layer.source().to_string());
        tracing::debug!(source = label.as_deref().unwrap_or_default(), "applying layer");
        let (outcome, records) = merge_with_conflicts(acc, next, config);
        if outcome.is_ok() {
            conflicts.extend(records.into_iter().map(|mut record| {
                record.layer.clone_from(&label);
                record
            }));
        }
        outcome
    });
    (merged, conflicts)
}
