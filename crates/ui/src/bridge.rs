//! UI Bridge Module
//!
//! Defines the communication protocol between the Slint UI thread
//! and the async Tokio runtime.

use tokio::sync::mpsc;
use worldclock_application::ports::{ClockDisplay, DisplayUpdate};

/// Commands sent from UI to the async runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// User picked an entry in the timezone selector.
    SelectTimezone {
        /// Selector index, `-1` when nothing is selected.
        index: i32,
    },
}

/// Updates sent from async runtime to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    /// The timezone list is available; enable the selector.
    CatalogLoaded {
        /// Option labels in catalog order.
        labels: Vec<String>,
        /// Index of the local timezone, if offered.
        selected_index: Option<usize>,
    },

    /// New text for the main clock.
    ClockText(String),

    /// New timezone label.
    TimezoneLabel(String),

    /// New UTC offset label.
    UtcOffset(String),
}

impl From<DisplayUpdate> for UiUpdate {
    fn from(update: DisplayUpdate) -> Self {
        match update {
            DisplayUpdate::Clock(face) => Self::ClockText(face.to_string()),
            DisplayUpdate::TimezoneLabel(label) => Self::TimezoneLabel(label),
            DisplayUpdate::UtcOffset(offset) => Self::UtcOffset(offset),
        }
    }
}

/// Display adapter that forwards every update to the UI thread.
#[derive(Debug, Clone)]
pub struct ChannelDisplay {
    tx: mpsc::UnboundedSender<UiUpdate>,
}

impl ChannelDisplay {
    /// Creates a display writing into `tx`.
    #[must_use]
    pub const fn new(tx: mpsc::UnboundedSender<UiUpdate>) -> Self {
        Self { tx }
    }
}

impl ClockDisplay for ChannelDisplay {
    fn render(&self, update: DisplayUpdate) {
        // The window may already be gone during shutdown.
        let _ = self.tx.send(update.into());
    }
}
