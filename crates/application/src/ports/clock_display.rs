//! Display port
//!
//! The render target the clock session writes to.

use worldclock_domain::ClockFace;

/// A single change to one of the display surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayUpdate {
    /// The main clock text.
    Clock(ClockFace),

    /// The human-readable timezone label.
    TimezoneLabel(String),

    /// The UTC offset label, e.g. `UTC -03:00`.
    UtcOffset(String),
}

/// Port for the surfaces that show the clock.
///
/// Implementations must be cheap and non-blocking; they are called from
/// the tick loop while the session lock is held.
pub trait ClockDisplay: Send + Sync {
    /// Applies one update.
    fn render(&self, update: DisplayUpdate);
}
