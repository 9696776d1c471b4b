//! Clock session: fetch one snapshot, then tick locally.
//!
//! A session anchors to a single server-reported instant and extrapolates
//! from it once per second. It never goes back to the time source while
//! ticking; each `start` re-anchors.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};
use worldclock_domain::{ClockFace, TimezoneId};

use super::surface::{SessionId, Surface};
use crate::error::SnapshotFetchError;
use crate::ports::{ClockDisplay, DisplayUpdate, TimeSource};

/// Period between two ticks. Each tick advances the clock by one second.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Owns the fetch-then-tick lifecycle for one timezone selection at a time.
///
/// At most one session task is outstanding: `start` aborts the previous
/// task and invalidates its id before spawning a new one.
///
/// # Example
///
/// ```ignore
/// let mut session = ClockSession::new(Arc::new(WorldTimeApiClient::new(&config)?), display);
/// session.start("America/Sao_Paulo");
/// // later, on a selection change
/// session.start("Asia/Tokyo");
/// ```
pub struct ClockSession<S, D> {
    source: Arc<S>,
    surface: Arc<Surface<D>>,
    task: Option<JoinHandle<()>>,
    session: Option<SessionId>,
}

impl<S, D> ClockSession<S, D>
where
    S: TimeSource + 'static,
    D: ClockDisplay + 'static,
{
    /// Creates an idle session writing to `display`.
    pub fn new(source: Arc<S>, display: D) -> Self {
        Self {
            source,
            surface: Arc::new(Surface::new(display)),
            task: None,
            session: None,
        }
    }

    /// Starts showing the time for `selection`.
    ///
    /// The previous session is stopped first. A blank selection leaves the
    /// display untouched and returns `None`. Otherwise the loading
    /// placeholder is shown before this returns, and the fetch and tick
    /// loop run on a spawned task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&mut self, selection: &str) -> Option<SessionId> {
        self.stop();

        let Ok(timezone) = TimezoneId::new(selection) else {
            debug!("empty selection, clock idle");
            return None;
        };

        let id = self
            .surface
            .begin(DisplayUpdate::Clock(ClockFace::Loading));
        debug!(session = %id, %timezone, "starting clock session");

        let task = tokio::spawn(run_session(
            id,
            timezone,
            Arc::clone(&self.source),
            Arc::clone(&self.surface),
        ));
        self.task = Some(task);
        self.session = Some(id);
        Some(id)
    }

    /// Stops the active session, if any. Safe to call repeatedly.
    ///
    /// The display keeps whatever it showed last.
    pub fn stop(&mut self) {
        self.surface.retire();
        if let Some(task) = self.task.take() {
            task.abort();
        }
        if let Some(id) = self.session.take() {
            debug!(session = %id, "clock session stopped");
        }
    }

    /// Returns true while a session is fetching or ticking.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Id of the session started last, unless stopped since.
    #[must_use]
    pub const fn current_session(&self) -> Option<SessionId> {
        self.session
    }
}

impl<S, D> Drop for ClockSession<S, D> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run_session<S, D>(
    id: SessionId,
    timezone: TimezoneId,
    source: Arc<S>,
    surface: Arc<Surface<D>>,
) where
    S: TimeSource,
    D: ClockDisplay,
{
    let snapshot = match source.fetch_snapshot(&timezone).await {
        Ok(snapshot) => snapshot,
        Err(source_error) => {
            let error = SnapshotFetchError::new(timezone, source_error);
            warn!(session = %id, %error, "snapshot fetch failed");
            surface.render_if_current(id, [DisplayUpdate::Clock(ClockFace::Error)]);
            return;
        }
    };

    let labels = [
        DisplayUpdate::TimezoneLabel(snapshot.timezone().display_label()),
        DisplayUpdate::UtcOffset(snapshot.utc_offset_label()),
    ];
    if !surface.render_if_current(id, labels) {
        debug!(session = %id, "discarding stale snapshot");
        return;
    }

    let mut clock = snapshot.server_time();
    debug!(session = %id, anchor = %clock, "clock anchored");

    let mut ticks = time::interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Burst);
    loop {
        ticks.tick().await;
        clock.advance();
        if !surface.render_if_current(id, [DisplayUpdate::Clock(ClockFace::Time(clock))]) {
            debug!(session = %id, "session superseded, ticker exiting");
            return;
        }
    }
}
