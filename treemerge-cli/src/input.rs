//! Reading input documents by extension.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use treemerge::Value;

use crate::error::CliError;

/// Formats understood by [`load_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
}

impl Format {
    /// Infer the format from a path's extension, case-insensitively.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        let ext = path.extension()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Read and parse the document at `path`.
///
/// # Errors
///
/// Returns [`CliError::UnsupportedFormat`] for unknown extensions,
/// [`CliError::Io`] if the file cannot be read, and a parse error if the
/// contents are malformed.
pub fn load_document(path: &Utf8Path) -> Result<Value, CliError> {
    let format =
        Format::from_path(path).ok_or_else(|| CliError::UnsupportedFormat(path.to_owned()))?;
    let text = read_text(path)?;
    let value = match format {
        Format::Json => {
            let json: serde_json::Value =
                serde_json::from_str(&text).map_err(|source| CliError::Json {
                    path: path.to_owned(),
                    source,
                })?;
            Value::from(json)
        }
        Format::Toml => {
            let table: toml::Table = toml::from_str(&text).map_err(|source| CliError::Toml {
                path: path.to_owned(),
                source: Box::new(source),
            })?;
            Value::from(toml::Value::Table(table))
        }
    };
    tracing::debug!(path = %path, nodes = value.node_count(), "loaded document");
    Ok(value)
}

fn read_text(path: &Utf8Path) -> Result<String, CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_owned(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| CliError::UnsupportedFormat(path.to_owned()))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
    dir.read_to_string(file_name).map_err(io_error)
}
