//! Numeric leaves.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A numeric value.
///
/// Integers and floats are distinct: `Int(1)` is not equal to `Float(1.0)`,
/// mirroring how JSON documents keep the two apart. `UInt` only carries
/// integers above `i64::MAX`; build integers through `From<u64>` to keep that
/// form canonical. Floats compare by bit pattern, so `NaN` equals itself and
/// `0.0` differs from `-0.0`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// A signed 64-bit integer.
    Int(i64),
    /// An unsigned integer too large for [`Number::Int`].
    UInt(u64),
    /// A 64-bit float. May be non-finite; validation rejects such values.
    Float(f64),
}

impl Number {
    /// Returns the value as a float, widening integers.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "mixed int/float combination is defined in float space"
    )]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(int) => int as f64,
            Self::UInt(uint) => uint as f64,
            Self::Float(float) => float,
        }
    }

    /// Returns `false` for NaN and infinite floats.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        match self {
            Self::Int(_) | Self::UInt(_) => true,
            Self::Float(float) => float.is_finite(),
        }
    }

    fn as_integer(self) -> Option<i128> {
        match self {
            Self::Int(int) => Some(i128::from(int)),
            Self::UInt(uint) => Some(i128::from(uint)),
            Self::Float(_) => None,
        }
    }

    fn from_integer(value: i128) -> Option<Self> {
        i64::try_from(value)
            .map(Self::Int)
            .or_else(|_| u64::try_from(value).map(Self::UInt))
            .ok()
    }

    /// Add two numbers. Integer sums stay integral unless they leave the
    /// `i64::MIN..=u64::MAX` range.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "summing is the combine policy")]
    pub fn sum(self, other: Self) -> Self {
        self.as_integer()
            .zip(other.as_integer())
            .and_then(|(left, right)| Self::from_integer(left + right))
            .unwrap_or_else(|| Self::Float(self.as_f64() + other.as_f64()))
    }

    /// The larger of two numbers; ties keep `self`.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if other.greater_than(self) { other } else { self }
    }

    /// The smaller of two numbers; ties keep `self`.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self.greater_than(other) { other } else { self }
    }

    fn greater_than(self, other: Self) -> bool {
        match (self.as_integer(), other.as_integer()) {
            (Some(left), Some(right)) => left > right,
            _ => self.as_f64() > other.as_f64(),
        }
    }

    pub(crate) fn hash_into<H: Hasher>(self, state: &mut H) {
        match self {
            Self::Int(int) => {
                0_u8.hash(state);
                int.hash(state);
            }
            Self::UInt(uint) => {
                2_u8.hash(state);
                uint.hash(state);
            }
            Self::Float(float) => {
                1_u8.hash(state);
                float.to_bits().hash(state);
            }
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::UInt(left), Self::UInt(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left.to_bits() == right.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Number {}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(int) => write!(f, "{int}"),
            Self::UInt(uint) => write!(f, "{uint}"),
            Self::Float(float) => write!(f, "{float}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Self::UInt(value), Self::Int)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
