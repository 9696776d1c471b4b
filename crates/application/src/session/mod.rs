//! The clock session and the display it drives.

mod clock_session;
mod surface;

pub use clock_session::{ClockSession, TICK_INTERVAL};
pub use surface::SessionId;
