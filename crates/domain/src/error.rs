//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A timezone identifier is empty or blank.
    #[error("invalid timezone identifier: {0:?}")]
    InvalidTimezone(String),

    /// A server timestamp could not be read as `YYYY-MM-DDTHH:MM:SS`.
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
