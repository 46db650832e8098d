//! Layer metadata and transport values.

use std::borrow::Cow;
use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

use crate::Value;

/// Where a layer came from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayerSource {
    /// Values baked into the application.
    Defaults,
    /// Values loaded from a file.
    File(Utf8PathBuf),
    /// Values collected from environment variables.
    Environment,
    /// Values supplied on the command line.
    Cli,
    /// Any other caller-defined source.
    Named(String),
}

impl fmt::Display for LayerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults => f.write_str("defaults"),
            Self::File(path) => write!(f, "file:{path}"),
            Self::Environment => f.write_str("environment"),
            Self::Cli => f.write_str("cli"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// One value in a layer stack together with its source.
#[derive(Clone, Debug)]
pub struct MergeLayer<'a> {
    source: LayerSource,
    value: Cow<'a, Value>,
}

impl<'a> MergeLayer<'a> {
    /// Construct a layer from any source.
    #[must_use]
    pub const fn new(source: LayerSource, value: Cow<'a, Value>) -> Self {
        Self { source, value }
    }

    /// Construct a layer originating from default values.
    #[must_use]
    pub const fn defaults(value: Cow<'a, Value>) -> Self {
        Self::new(LayerSource::Defaults, value)
    }

    /// Construct a layer originating from a file.
    #[must_use]
    pub const fn file(value: Cow<'a, Value>, path: Utf8PathBuf) -> Self {
        Self::new(LayerSource::File(path), value)
    }

    /// Construct a layer originating from environment variables.
    #[must_use]
    pub const fn environment(value: Cow<'a, Value>) -> Self {
        Self::new(LayerSource::Environment, value)
    }

    /// Construct a layer originating from CLI arguments.
    #[must_use]
    pub const fn cli(value: Cow<'a, Value>) -> Self {
        Self::new(LayerSource::Cli, value)
    }

    /// Returns the source of the layer.
    #[must_use]
    pub const fn source(&self) -> &LayerSource {
        &self.source
    }

    /// Returns the associated path if this layer was read from a file.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match &self.source {
            LayerSource::File(path) => Some(path),
            _ => None,
        }
    }

    /// Borrow the layer's value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the owned value carried by the layer.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value.into_owned()
    }

    /// Convert this layer into a `'static` owned variant.
    #[must_use]
    pub fn into_owned(self) -> MergeLayer<'static> {
        MergeLayer {
            source: self.source,
            value: Cow::Owned(self.value.into_owned()),
        }
    }
}
