//! Time source port
//!
//! Abstracts the remote service that lists timezones and reports the
//! current time in each of them.

use async_trait::async_trait;
use worldclock_domain::{DomainError, TimeSnapshot, TimezoneId};

/// Errors reported by a time source.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TimeSourceError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The response body was not in the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// The response decoded but its content is invalid.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(#[from] DomainError),
}

/// Port for the external time service.
#[async_trait]
pub trait TimeSource: Send + Sync {
    /// Lists every timezone the service knows, in the service's order.
    ///
    /// # Errors
    /// Returns an error if the list cannot be fetched or decoded.
    async fn list_timezones(&self) -> Result<Vec<TimezoneId>, TimeSourceError>;

    /// Fetches the current time for one timezone.
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be fetched or decoded.
    async fn fetch_snapshot(&self, timezone: &TimezoneId) -> Result<TimeSnapshot, TimeSourceError>;
}
