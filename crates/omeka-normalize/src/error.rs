//! Error types for normalization.

use thiserror::Error;

/// A structural precondition of a transform was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The input shape does not fit the transform's contract.
    #[error("malformed {field}: {reason}")]
    MalformedInput { field: &'static str, reason: String },
}

impl NormalizeError {
    pub(crate) fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
