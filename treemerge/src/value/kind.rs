//! Discriminators used for dispatch and validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The shape of a [`crate::Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// [`crate::Value::Null`].
    Null,
    /// [`crate::Value::Bool`].
    Bool,
    /// [`crate::Value::Number`].
    Number,
    /// [`crate::Value::Text`].
    Text,
    /// [`crate::Value::Sequence`].
    Sequence,
    /// [`crate::Value::Mapping`].
    Mapping,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Null,
        Self::Bool,
        Self::Number,
        Self::Text,
        Self::Sequence,
        Self::Mapping,
    ];

    /// Lowercase name used in messages and settings files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::Text => "text",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }

    /// Returns `true` for kinds that hold other values.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Sequence | Self::Mapping)
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of [`Kind`]s accepted by type validation.
///
/// # Examples
///
/// ```rust
/// use treemerge::{Kind, KindSet};
///
/// let documents = KindSet::only(&[Kind::Mapping, Kind::Text]);
/// assert!(documents.contains(Kind::Mapping));
/// assert!(!documents.contains(Kind::Sequence));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KindSet(u8);

impl KindSet {
    /// A set containing every kind.
    #[must_use]
    pub const fn all() -> Self {
        Self((1 << Kind::ALL.len()) - 1)
    }

    /// A set containing no kinds.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// A set containing exactly `kinds`.
    #[must_use]
    pub fn only(kinds: &[Kind]) -> Self {
        kinds.iter().fold(Self::empty(), |set, kind| set.with(*kind))
    }

    /// Returns a copy of this set with `kind` added.
    #[must_use]
    pub const fn with(self, kind: Kind) -> Self {
        Self(self.0 | kind.bit())
    }

    /// Returns a copy of this set with `kind` removed.
    #[must_use]
    pub const fn without(self, kind: Kind) -> Self {
        Self(self.0 & !kind.bit())
    }

    /// Returns `true` when `kind` is a member.
    #[must_use]
    pub const fn contains(self, kind: Kind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Iterate over the members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Kind> {
        Kind::ALL.into_iter().filter(move |kind| self.contains(*kind))
    }
}

impl Default for KindSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Kind> for KindSet {
    fn from_iter<I: IntoIterator<Item = Kind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl Serialize for KindSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for KindSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kinds = Vec::<Kind>::deserialize(deserializer)?;
        Ok(kinds.into_iter().collect())
    }
}
