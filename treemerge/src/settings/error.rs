//! Errors raised while loading settings.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failure to produce valid [`super::MergeSettings`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file '{path}': {source}")]
    File {
        /// Path that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A provider failed to parse or the merged data did not deserialise.
    #[error("failed to gather settings: {0}")]
    Gathering(#[from] Box<figment::Error>),

    /// A value was well-formed but out of range.
    #[error("invalid setting '{key}': {message}")]
    Validation {
        /// Offending key.
        key: String,
        /// Explanation of the problem.
        message: String,
    },
}

impl SettingsError {
    pub(crate) fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }
}
