//! Local timezone detection port

use worldclock_domain::TimezoneId;

/// Port for reading the timezone configured on the local machine.
///
/// Implementations never fail: when nothing usable is configured they
/// return a platform default.
pub trait LocalTimezone: Send + Sync {
    /// Returns the locally configured timezone.
    fn detect(&self) -> TimezoneId;
}
