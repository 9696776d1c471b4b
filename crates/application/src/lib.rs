//! World Clock Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - The catalog use case and the ticking clock session
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod session;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult, CatalogLoadError, SnapshotFetchError};
pub use ports::{
    Clock, ClockDisplay, DisplayUpdate, LocalTimezone, TimeSource, TimeSourceError,
};
pub use session::{ClockSession, SessionId, TICK_INTERVAL};
pub use use_cases::LoadCatalog;
