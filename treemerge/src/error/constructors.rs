//! Constructors and classification helpers for `MergeError`.

use crate::Value;

use super::MergeError;

impl MergeError {
    /// Build a [`MergeError::Conflict`] from borrowed operands.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemerge::{MergeError, Value};
    /// let err = MergeError::conflict("v", &Value::from("left"), &Value::from("right"));
    /// assert_eq!(err.key(), Some("v"));
    /// ```
    #[must_use]
    pub fn conflict(key: impl Into<String>, left: &Value, right: &Value) -> Self {
        Self::Conflict {
            key: key.into(),
            left: Box::new(left.clone()),
            right: Box::new(right.clone()),
        }
    }

    /// Build a [`MergeError::Custom`] for use inside custom functions.
    #[must_use]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }

    /// Path reported by the error, when it refers to a location.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::DepthExceeded { path, .. } | Self::TypeMismatch { path, .. } => Some(path.as_str()),
            Self::Conflict { key, .. } => Some(key.as_str()),
            Self::BudgetExceeded { .. } | Self::TimedOut { .. } | Self::Custom { .. } => None,
        }
    }

    /// Returns `true` for failures caused by resource limits rather than by
    /// the content of the inputs.
    #[must_use]
    pub const fn is_limit(&self) -> bool {
        matches!(
            self,
            Self::DepthExceeded { .. } | Self::BudgetExceeded { .. } | Self::TimedOut { .. }
        )
    }
}
