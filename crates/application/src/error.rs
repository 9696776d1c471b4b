//! Application error types

use thiserror::Error;
use worldclock_domain::TimezoneId;

use crate::ports::TimeSourceError;

/// The timezone catalog could not be loaded. Fatal to the application.
#[derive(Debug, Clone, Error)]
pub enum CatalogLoadError {
    /// The time source failed to deliver the list.
    #[error("failed to load timezone list: {0}")]
    Source(#[from] TimeSourceError),

    /// The time source answered with an empty list.
    #[error("time service returned an empty timezone list")]
    Empty,
}

/// The snapshot for one timezone could not be fetched. Scoped to the
/// current selection.
#[derive(Debug, Clone, Error)]
#[error("failed to fetch time for {timezone}: {source}")]
pub struct SnapshotFetchError {
    /// The timezone that was requested.
    pub timezone: TimezoneId,
    /// What went wrong.
    #[source]
    pub source: TimeSourceError,
}

impl SnapshotFetchError {
    /// Creates a new error for `timezone`.
    #[must_use]
    pub const fn new(timezone: TimezoneId, source: TimeSourceError) -> Self {
        Self { timezone, source }
    }
}

/// Application-level errors.
#[derive(Debug, Clone, Error)]
pub enum ApplicationError {
    /// Start-up failed.
    #[error(transparent)]
    CatalogLoad(#[from] CatalogLoadError),

    /// A per-timezone fetch failed.
    #[error(transparent)]
    SnapshotFetch(#[from] SnapshotFetchError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
