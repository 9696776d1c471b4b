//! World Clock Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus runtime configuration.

pub mod adapters;
pub mod settings;

pub use adapters::{SystemClock, SystemTimezone, WorldTimeApiClient};
pub use settings::{ClockConfig, ConfigError, DEFAULT_API_BASE_URL};
