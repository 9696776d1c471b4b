//! Application window management
//!
//! This module provides the main window and wires it to the clock
//! controller running on a background Tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use slint::{ComponentHandle, ModelRc, SharedString, VecModel};
use tokio::sync::mpsc;
use tracing::error;
use worldclock_application::ports::Clock;
use worldclock_infrastructure::{ClockConfig, SystemClock, SystemTimezone, WorldTimeApiClient};

use crate::MainWindow;
use crate::bridge::{ChannelDisplay, UiCommand, UiUpdate};
use crate::controller::{report_unavailable, run_clock};

/// Application window wrapper with business logic bindings.
pub struct AppWindow {
    window: MainWindow,
    _update_timer: slint::Timer,
}

impl AppWindow {
    /// Creates the main window and starts the clock runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn new(config: ClockConfig) -> Result<Self, slint::PlatformError> {
        let window = MainWindow::new()?;
        let ui_weak = window.as_weak();

        window.set_footer_year(SystemClock::new().current_year());

        // Create channels for UI <-> async communication
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<UiCommand>();
        let (update_tx, mut update_rx) = mpsc::unbounded_channel::<UiUpdate>();

        window.on_timezone_selected(move |index| {
            let _ = cmd_tx.send(UiCommand::SelectTimezone { index });
        });

        // Spawn the async runtime in a separate thread
        std::thread::spawn(move || {
            run_async_runtime(&config, cmd_rx, update_tx);
        });

        // Process UI updates on the main thread using a timer
        let update_timer = slint::Timer::default();
        update_timer.start(
            slint::TimerMode::Repeated,
            Duration::from_millis(16), // ~60fps
            move || {
                while let Ok(update) = update_rx.try_recv() {
                    if let Some(ui) = ui_weak.upgrade() {
                        apply_update(&ui, update);
                    }
                }
            },
        );

        Ok(Self {
            window,
            _update_timer: update_timer,
        })
    }

    /// Runs the application event loop.
    ///
    /// This method blocks until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop fails.
    pub fn run(&self) -> Result<(), slint::PlatformError> {
        self.window.run()
    }

    /// Returns a reference to the underlying Slint window.
    #[must_use]
    pub const fn window(&self) -> &MainWindow {
        &self.window
    }
}

/// Applies one update coming from the runtime.
fn apply_update(ui: &MainWindow, update: UiUpdate) {
    match update {
        UiUpdate::CatalogLoaded {
            labels,
            selected_index,
        } => {
            let labels: Vec<SharedString> = labels.into_iter().map(SharedString::from).collect();
            ui.set_timezone_labels(ModelRc::new(VecModel::from(labels)));
            ui.set_selected_index(
                selected_index
                    .and_then(|index| i32::try_from(index).ok())
                    .unwrap_or(-1),
            );
            ui.set_selector_enabled(true);
        }
        UiUpdate::ClockText(text) => ui.set_clock_text(text.into()),
        UiUpdate::TimezoneLabel(text) => ui.set_timezone_label(text.into()),
        UiUpdate::UtcOffset(text) => ui.set_utc_offset(text.into()),
    }
}

/// Runs the async runtime hosting the clock controller.
fn run_async_runtime(
    config: &ClockConfig,
    cmd_rx: mpsc::UnboundedReceiver<UiCommand>,
    update_tx: mpsc::UnboundedSender<UiUpdate>,
) {
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to create Tokio runtime");
            report_unavailable(&ChannelDisplay::new(update_tx));
            return;
        }
    };

    rt.block_on(async move {
        let source = match WorldTimeApiClient::new(config) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                error!(error = %e, "failed to create HTTP client");
                report_unavailable(&ChannelDisplay::new(update_tx));
                return;
            }
        };

        if let Err(e) = run_clock(source, SystemTimezone::new(), cmd_rx, update_tx).await {
            error!(error = %e, "initialization failed");
        }
    });
}
