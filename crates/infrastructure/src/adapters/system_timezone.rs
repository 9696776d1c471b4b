//! Local timezone detection from the operating system.

use std::fs;
use std::path::PathBuf;

use tracing::debug;
use worldclock_application::ports::LocalTimezone;
use worldclock_domain::TimezoneId;

const LOCALTIME_PATH: &str = "/etc/localtime";
const TIMEZONE_FILE_PATH: &str = "/etc/timezone";

/// Reads the machine's configured timezone.
///
/// Checked in order: the `TZ` variable, the `/etc/localtime` symlink
/// target, the contents of `/etc/timezone`. Falls back to `UTC`.
#[derive(Debug, Clone)]
pub struct SystemTimezone {
    tz_var: Option<String>,
    localtime: PathBuf,
    timezone_file: PathBuf,
}

impl SystemTimezone {
    /// Creates a detector for the current process and the standard paths.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sources(
            std::env::var("TZ").ok(),
            LOCALTIME_PATH,
            TIMEZONE_FILE_PATH,
        )
    }

    /// Creates a detector with explicit sources.
    #[must_use]
    pub fn with_sources(
        tz_var: Option<String>,
        localtime: impl Into<PathBuf>,
        timezone_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            tz_var,
            localtime: localtime.into(),
            timezone_file: timezone_file.into(),
        }
    }

    /// `TZ=America/Sao_Paulo` or `TZ=:America/Sao_Paulo`. Paths are not
    /// timezone names and are skipped.
    fn from_tz_var(&self) -> Option<TimezoneId> {
        let value = self.tz_var.as_deref()?.trim();
        let value = value.strip_prefix(':').unwrap_or(value);
        if value.starts_with('/') {
            return None;
        }
        TimezoneId::new(value).ok()
    }

    fn from_localtime_link(&self) -> Option<TimezoneId> {
        let target = fs::read_link(&self.localtime).ok()?;
        let target = target.to_str()?;
        let (_, name) = target.split_once("zoneinfo/")?;
        let name = name
            .strip_prefix("posix/")
            .or_else(|| name.strip_prefix("right/"))
            .unwrap_or(name);
        TimezoneId::new(name).ok()
    }

    fn from_timezone_file(&self) -> Option<TimezoneId> {
        let contents = fs::read_to_string(&self.timezone_file).ok()?;
        TimezoneId::new(contents.lines().next()?).ok()
    }
}

impl Default for SystemTimezone {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalTimezone for SystemTimezone {
    fn detect(&self) -> TimezoneId {
        let detected = self
            .from_tz_var()
            .or_else(|| self.from_localtime_link())
            .or_else(|| self.from_timezone_file());

        if let Some(timezone) = detected {
            debug!(%timezone, "detected local timezone");
            timezone
        } else {
            debug!("no local timezone configured, using UTC");
            TimezoneId::utc()
        }
    }
}
