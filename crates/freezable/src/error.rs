//! The freeze violation error.
//!
//! Exactly one domain error kind exists: a mutating operation was attempted
//! on a frozen value. The guard raises it before the operation body runs, so
//! a caller that sees this error can rely on the value being unchanged.

use serde::{Deserialize, Serialize};

/// Raised when a guarded mutating operation is attempted while the value is
/// frozen.
///
/// The error never wraps an underlying cause: the guard rejects the call
/// before any real work starts. It is always surfaced to the immediate
/// caller and never caught internally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum FrozenError {
    /// A named guarded operation was denied.
    #[error("cannot call '{operation}' while object is frozen")]
    Operation {
        /// Name of the denied operation
        operation: String,
    },

    /// Denial with a caller-supplied message.
    #[error("{message}")]
    Message {
        /// Description of the denied mutation
        message: String,
    },

    /// Denial with no further detail.
    #[error("cannot mutate while object is frozen")]
    Frozen,
}

impl FrozenError {
    /// Create an error naming the denied operation.
    pub fn operation(operation: impl Into<String>) -> Self {
        Self::Operation {
            operation: operation.into(),
        }
    }

    /// Create an error with a caller-supplied message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }

    /// Name of the denied operation, when one was recorded.
    pub fn operation_name(&self) -> Option<&str> {
        match self {
            Self::Operation { operation } => Some(operation),
            _ => None,
        }
    }
}
