//! Infrastructure adapters

mod system_clock;
mod system_timezone;
mod world_time_api;

pub use system_clock::SystemClock;
pub use system_timezone::SystemTimezone;
pub use world_time_api::WorldTimeApiClient;
