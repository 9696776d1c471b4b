//! Clock port for reading the machine's own time

use chrono::{DateTime, Datelike, Local};

/// Port for getting the current local time.
///
/// Used for incidental display such as the footer year; the world clock
/// itself never reads the machine time.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> DateTime<Local>;

    /// Returns the current local calendar year.
    fn current_year(&self) -> i32 {
        self.now().year()
    }
}
