//! Error types for `treemerge`.

use camino::Utf8PathBuf;
use thiserror::Error;
use treemerge::{MergeError, SettingsError, ValueConversionError};

/// Errors surfaced by the `treemerge` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// An input file has no recognised extension.
    #[error("unsupported input format for '{0}'; expected .json or .toml")]
    UnsupportedFormat(Utf8PathBuf),

    /// An input file could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File being read.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An input file is not valid JSON.
    #[error("failed to parse JSON in '{path}': {source}")]
    Json {
        /// File being parsed.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// An input file is not valid TOML.
    #[error("failed to parse TOML in '{path}': {source}")]
    Toml {
        /// File being parsed.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: Box<toml::de::Error>,
    },

    /// The documents could not be merged.
    #[error("merge failed: {0}")]
    Merge(#[from] MergeError),

    /// `--diff` was requested with fewer than two documents.
    #[error("--diff needs at least two input files")]
    DiffNeedsTwoInputs,

    /// The merged document cannot be written as JSON.
    #[error(transparent)]
    Conversion(#[from] ValueConversionError),

    /// A report could not be serialised.
    #[error("failed to write JSON output: {0}")]
    Output(#[from] serde_json::Error),

    /// Writing to stdout or stderr failed.
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}
