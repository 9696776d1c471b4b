//! Clock controller
//!
//! Runs on the Tokio runtime: loads the catalog, drives the clock session
//! and reacts to selector changes until the UI goes away.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};
use worldclock_application::ports::{ClockDisplay, DisplayUpdate, LocalTimezone, TimeSource};
use worldclock_application::{ApplicationResult, ClockSession, LoadCatalog};
use worldclock_domain::{ClockFace, TimezoneCatalog, TimezoneId, UNAVAILABLE_TEXT};

use crate::bridge::{ChannelDisplay, UiCommand, UiUpdate};

/// Shows the permanent start-up failure state.
pub fn report_unavailable(display: &impl ClockDisplay) {
    display.render(DisplayUpdate::Clock(ClockFace::Error));
    display.render(DisplayUpdate::TimezoneLabel(UNAVAILABLE_TEXT.to_string()));
}

/// Loads the catalog, then serves selector commands until `commands`
/// closes.
///
/// # Errors
///
/// Returns `ApplicationError::CatalogLoad` if the timezone list cannot be
/// loaded. The failure state has already been sent to the UI by then and
/// the selector stays disabled.
pub async fn run_clock<S, L>(
    source: Arc<S>,
    local_timezone: L,
    mut commands: mpsc::UnboundedReceiver<UiCommand>,
    updates: mpsc::UnboundedSender<UiUpdate>,
) -> ApplicationResult<()>
where
    S: TimeSource + 'static,
    L: LocalTimezone,
{
    let display = ChannelDisplay::new(updates.clone());

    let catalog = match LoadCatalog::new(Arc::clone(&source), local_timezone)
        .execute()
        .await
    {
        Ok(catalog) => catalog,
        Err(error) => {
            report_unavailable(&display);
            return Err(error.into());
        }
    };

    let labels = catalog
        .options()
        .into_iter()
        .map(|option| option.label)
        .collect();
    let _ = updates.send(UiUpdate::CatalogLoaded {
        labels,
        selected_index: catalog.initial_index(),
    });

    let mut session = ClockSession::new(source, display);
    session.start(selection_value(catalog.initial_selection()));

    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::SelectTimezone { index } => {
                let selection = selected(&catalog, index);
                debug!(index, timezone = ?selection, "timezone selected");
                session.start(selection_value(selection));
            }
        }
    }

    session.stop();
    info!("UI closed, clock stopped");
    Ok(())
}

fn selected(catalog: &TimezoneCatalog, index: i32) -> Option<&TimezoneId> {
    usize::try_from(index).ok().and_then(|index| catalog.get(index))
}

fn selection_value(selection: Option<&TimezoneId>) -> &str {
    selection.map_or("", TimezoneId::as_str)
}
