//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod clock_display;
mod local_timezone;
mod time_source;

pub use clock::Clock;
pub use clock_display::{ClockDisplay, DisplayUpdate};
pub use local_timezone::LocalTimezone;
pub use time_source::{TimeSource, TimeSourceError};
