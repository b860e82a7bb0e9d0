use thiserror::Error;

/// Classification of a validation failure.
///
/// Every rule in [`crate::validation`] reports exactly one of these kinds,
/// so callers can branch on the class of problem without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Wrong shape of input (letters where digits belong, etc.)
    TypeMismatch,
    /// Value outside its allowed bounds (lengths, dates)
    OutOfRange,
    /// Structurally invalid string (email, paths)
    Malformed,
    /// Uniqueness violation on a collection key
    Duplicate,
    /// Missing collection key
    NotFound,
}

/// A recoverable validation failure: a kind plus a human-readable message
/// that embeds the offending value.
///
/// Failures are ordinary values, never panics. The caller decides whether
/// to reject, re-prompt, or abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("{0}")]
    Validation(#[from] ValidationFailure),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RoloError>;
