//! Loading merge settings from defaults, a TOML file, and the environment.
//!
//! [`MergeSettings`] is the serialisable part of [`MergeConfig`]: everything
//! except custom functions. [`MergeSettings::load`] layers the built-in
//! defaults, an optional TOML file, and `TREEMERGE_*` environment variables
//! (nested keys separated by `__`), then validates the result.

mod error;

use std::num::NonZeroUsize;
use std::time::Duration;

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

pub use error::SettingsError;

use crate::{
    CombinePolicy, ConflictResolver, DEFAULT_MAX_DEPTH, KindSet, ListMode, MergeConfig, Strategy,
};

/// Environment prefix read by [`MergeSettings::load`].
pub const ENV_PREFIX: &str = "TREEMERGE_";

/// Named merge options as they appear in settings files.
///
/// ```toml
/// strategy = "combine"
/// resolver = "merge"
/// list_mode = "union"
/// max_depth = 32
///
/// [combine]
/// numbers = "max"
/// separator = ", "
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeSettings {
    /// Top-level strategy.
    pub strategy: Strategy,
    /// Conflict resolver.
    pub resolver: ConflictResolver,
    /// List merge mode.
    pub list_mode: ListMode,
    /// Maximum recursion depth; must be positive.
    pub max_depth: usize,
    /// Validate inputs before merging.
    pub validate: bool,
    /// Kinds accepted at every node of an input when validating.
    pub supported_kinds: KindSet,
    /// Scalar combination under the combine strategy.
    pub combine: CombinePolicy,
    /// Maximum number of merge steps per call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_budget: Option<usize>,
    /// Wall-clock budget per call, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_budget_ms: Option<u64>,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            resolver: ConflictResolver::default(),
            list_mode: ListMode::default(),
            max_depth: DEFAULT_MAX_DEPTH.get(),
            validate: false,
            supported_kinds: KindSet::all(),
            combine: CombinePolicy::default(),
            node_budget: None,
            time_budget_ms: None,
        }
    }
}

impl MergeSettings {
    /// Gather settings from defaults, `file` (when given), and the
    /// environment, in increasing precedence.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::File`] if `file` cannot be read,
    /// [`SettingsError::Gathering`] if a source fails to parse or extract, and
    /// [`SettingsError::Validation`] if a limit is zero.
    pub fn load(file: Option<&Utf8Path>) -> Result<Self, SettingsError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            let data = std::fs::read_to_string(path).map_err(|source| SettingsError::File {
                path: path.to_owned(),
                source,
            })?;
            tracing::debug!(path = %path, "loaded settings file");
            figment = figment.merge(Toml::string(&data));
        }
        let settings: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|err| SettingsError::Gathering(Box::new(err)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject zero limits.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Validation`] naming the offending key.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_depth == 0 {
            return Err(SettingsError::validation("max_depth", "must be positive"));
        }
        if self.node_budget == Some(0) {
            return Err(SettingsError::validation(
                "node_budget",
                "must be positive when set",
            ));
        }
        if self.time_budget_ms == Some(0) {
            return Err(SettingsError::validation(
                "time_budget_ms",
                "must be positive when set",
            ));
        }
        Ok(())
    }

    /// Build the equivalent [`MergeConfig`].
    ///
    /// A zero `max_depth` falls back to [`DEFAULT_MAX_DEPTH`] and zero budgets
    /// are treated as absent; [`Self::load`] rejects both beforehand.
    #[must_use]
    pub fn into_config(self) -> MergeConfig {
        MergeConfig::default()
            .with_strategy(self.strategy)
            .with_resolver(self.resolver)
            .with_list_mode(self.list_mode)
            .with_max_depth(NonZeroUsize::new(self.max_depth).unwrap_or(DEFAULT_MAX_DEPTH))
            .with_validation(self.validate)
            .with_supported_kinds(self.supported_kinds)
            .with_combine(self.combine)
            .with_node_budget(self.node_budget.and_then(NonZeroUsize::new))
            .with_time_budget(
                self.time_budget_ms
                    .filter(|ms| *ms > 0)
                    .map(Duration::from_millis),
            )
    }
}

#[cfg(test)]
mod tests;
