//! The mergeable value universe.
//!
//! [`Value`] is a closed tagged union over the six shapes the engine knows how
//! to combine. Values are owned trees, so they are acyclic by construction and
//! merging can always borrow both inputs while building a fresh output.

mod convert;
mod kind;
mod number;

use std::collections::BTreeMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

pub use convert::ValueConversionError;
pub use kind::{Kind, KindSet};
pub use number::Number;

/// Keyed collection of values. Keys are unique and iteration order is
/// deterministic, although no merge result depends on it.
pub type Mapping = BTreeMap<String, Value>;

/// A node in a mergeable data tree.
///
/// # Examples
///
/// ```rust
/// use treemerge::{Kind, Value};
///
/// let doc = Value::mapping([("port", Value::from(8080)), ("host", Value::from("localhost"))]);
/// assert_eq!(doc.kind(), Kind::Mapping);
/// assert_eq!(doc.get("port"), Some(&Value::from(8080)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer or floating-point number.
    Number(Number),
    /// A UTF-8 string.
    Text(String),
    /// An ordered list of values.
    Sequence(Vec<Self>),
    /// A string-keyed collection of values.
    Mapping(Mapping),
}

impl Value {
    /// Construct [`Value::Null`].
    #[must_use]
    pub const fn null() -> Self {
        Self::Null
    }

    /// Construct an empty [`Value::Mapping`].
    #[must_use]
    pub const fn empty_mapping() -> Self {
        Self::Mapping(BTreeMap::new())
    }

    /// Build a mapping from key/value pairs. Later duplicates replace earlier
    /// ones.
    #[must_use]
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Build a sequence from anything convertible into values.
    #[must_use]
    pub fn sequence<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Returns the discriminator for this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Number(_) => Kind::Number,
            Self::Text(_) => Kind::Text,
            Self::Sequence(_) => Kind::Sequence,
            Self::Mapping(_) => Kind::Mapping,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for a mapping without entries.
    #[must_use]
    pub fn is_empty_mapping(&self) -> bool {
        matches!(self, Self::Mapping(map) if map.is_empty())
    }

    /// Borrow the entries of a mapping.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the items of a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the contents of a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Look up `key` when this value is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Follow a dotted path (`"server.port"`) through nested mappings.
    #[must_use]
    pub fn pointer(&self, path: &str) -> Option<&Self> {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| node.get(segment))
    }

    /// Stable structural hash of the value.
    ///
    /// Equal values always share a fingerprint; floats hash by the same bit
    /// pattern they compare by. Distinct values may collide, so callers must
    /// confirm hits with `==`.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash_into(&mut hasher);
        hasher.finish()
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Self::Null => {}
            Self::Bool(flag) => flag.hash(state),
            Self::Number(number) => number.hash_into(state),
            Self::Text(text) => text.hash(state),
            Self::Sequence(items) => {
                items.len().hash(state);
                for item in items {
                    item.hash_into(state);
                }
            }
            Self::Mapping(map) => {
                map.len().hash(state);
                for (key, value) in map {
                    key.hash(state);
                    value.hash_into(state);
                }
            }
        }
    }

    /// Count every node in the tree, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Sequence(items) => 1 + items.iter().map(Self::node_count).sum::<usize>(),
            Self::Mapping(map) => 1 + map.values().map(Self::node_count).sum::<usize>(),
            _ => 1,
        }
    }
}
