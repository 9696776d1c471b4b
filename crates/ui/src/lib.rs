//! World Clock UI - User interface layer
//!
//! This crate provides the Slint-based user interface for the World Clock
//! and the controller that drives it from a Tokio runtime.

// Allow lints that trigger on Slint-generated code which we cannot control
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::needless_pass_by_value)]

mod app_window;
pub mod bridge;
pub mod controller;

pub use app_window::AppWindow;
pub use bridge::{ChannelDisplay, UiCommand, UiUpdate};
pub use controller::{report_unavailable, run_clock};

// Include the generated Slint code
slint::include_modules!();
