//! World Clock Domain - Core types
//!
//! This crate defines the domain model for the World Clock.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod snapshot;
pub mod state;
pub mod timezone;

pub use error::{DomainError, DomainResult};
pub use snapshot::{TimeSnapshot, WallClock};
pub use state::{ClockFace, ERROR_TEXT, LOADING_TEXT, UNAVAILABLE_TEXT};
pub use timezone::{TimezoneCatalog, TimezoneId, TimezoneOption};
