//! Clock display state for UI binding.
//!
//! This module defines what the clock face shows at each stage of a
//! session, so the UI only has to render text.

use std::fmt;

use crate::snapshot::WallClock;

/// Placeholder shown while a snapshot is being fetched.
pub const LOADING_TEXT: &str = "Buscando...";

/// Placeholder shown when a fetch or the application start-up failed.
pub const ERROR_TEXT: &str = "Erro!";

/// Timezone label shown when the catalog could not be loaded.
pub const UNAVAILABLE_TEXT: &str = "Não foi possível carregar a aplicação.";

/// What the main clock text shows.
///
/// - `Loading`: a fetch is in flight
/// - `Time`: the session is ticking
/// - `Error`: the last fetch failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockFace {
    /// A snapshot fetch is in progress.
    Loading,

    /// The locally extrapolated time.
    Time(WallClock),

    /// The snapshot could not be obtained.
    Error,
}

impl ClockFace {
    /// Returns true while a fetch is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if the face shows an error placeholder.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns the displayed time, if ticking.
    #[must_use]
    pub const fn time(&self) -> Option<WallClock> {
        match self {
            Self::Time(clock) => Some(*clock),
            _ => None,
        }
    }
}

impl fmt::Display for ClockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str(LOADING_TEXT),
            Self::Time(clock) => write!(f, "{clock}"),
            Self::Error => f.write_str(ERROR_TEXT),
        }
    }
}
