//! Load catalog use case

use std::sync::Arc;

use tracing::info;
use worldclock_domain::TimezoneCatalog;

use crate::error::CatalogLoadError;
use crate::ports::{LocalTimezone, TimeSource};

/// Fetches the list of timezones once and pairs it with the timezone
/// detected on the local machine.
pub struct LoadCatalog<S, L> {
    source: Arc<S>,
    local_timezone: L,
}

impl<S: TimeSource, L: LocalTimezone> LoadCatalog<S, L> {
    /// Creates a new `LoadCatalog` use case.
    pub const fn new(source: Arc<S>, local_timezone: L) -> Self {
        Self {
            source,
            local_timezone,
        }
    }

    /// Executes the use case.
    ///
    /// Either the whole catalog is returned or nothing is: a partial list
    /// is never produced.
    ///
    /// # Errors
    /// Returns `CatalogLoadError::Source` if the list cannot be fetched or
    /// decoded, and `CatalogLoadError::Empty` if the service offers nothing.
    pub async fn execute(&self) -> Result<TimezoneCatalog, CatalogLoadError> {
        let zones = self.source.list_timezones().await?;
        if zones.is_empty() {
            return Err(CatalogLoadError::Empty);
        }

        let local = self.local_timezone.detect();
        let catalog = TimezoneCatalog::new(zones, local);
        info!(
            timezones = catalog.len(),
            local = %catalog.local(),
            offered = catalog.initial_index().is_some(),
            "timezone catalog loaded"
        );
        Ok(catalog)
    }
}
