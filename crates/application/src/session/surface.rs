//! The display shared by successive clock sessions.

use std::fmt;

use parking_lot::Mutex;

use crate::ports::{ClockDisplay, DisplayUpdate};

/// Generation number of a `ClockSession::start` call.
///
/// Ids only ever grow; the surface accepts writes from the current id only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SessionId(u64);

impl SessionId {
    /// Returns the raw generation number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct SurfaceState<D> {
    current: SessionId,
    display: D,
}

/// A display guarded together with the id of the session allowed to
/// write to it.
///
/// Bumping the id and writing both happen under one lock, so a session
/// that has been superseded can never reach the display afterwards.
pub(crate) struct Surface<D> {
    state: Mutex<SurfaceState<D>>,
}

impl<D: ClockDisplay> Surface<D> {
    pub(crate) fn new(display: D) -> Self {
        Self {
            state: Mutex::new(SurfaceState {
                current: SessionId::default(),
                display,
            }),
        }
    }

    /// Opens a new session, rendering `initial` as its first write.
    pub(crate) fn begin(&self, initial: DisplayUpdate) -> SessionId {
        let mut state = self.state.lock();
        state.current = state.current.next();
        state.display.render(initial);
        state.current
    }

    /// Invalidates the current session without writing anything.
    pub(crate) fn retire(&self) {
        let mut state = self.state.lock();
        state.current = state.current.next();
    }

    /// Writes `updates` if `id` is still the current session.
    ///
    /// Returns false, writing nothing, if `id` has been superseded.
    pub(crate) fn render_if_current(
        &self,
        id: SessionId,
        updates: impl IntoIterator<Item = DisplayUpdate>,
    ) -> bool {
        let state = self.state.lock();
        if state.current != id {
            return false;
        }
        for update in updates {
            state.display.render(update);
        }
        true
    }
}
