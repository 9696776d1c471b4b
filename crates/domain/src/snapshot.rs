//! Time snapshots and the locally advancing wall clock.

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::{DomainError, DomainResult};
use crate::timezone::TimezoneId;

/// Length of `YYYY-MM-DDTHH:MM:SS`.
const TIMESTAMP_PREFIX_LEN: usize = 19;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A wall-clock reading in some timezone, at one-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WallClock(NaiveDateTime);

impl WallClock {
    /// Wraps a naive date-time. Sub-second precision is dropped.
    #[must_use]
    pub fn new(datetime: NaiveDateTime) -> Self {
        use chrono::Timelike;
        Self(datetime.with_nanosecond(0).unwrap_or(datetime))
    }

    /// Parses the date and time-to-the-second prefix of an ISO-8601 string.
    ///
    /// Fractional seconds and any zone suffix after the first 19
    /// characters are ignored, so `2024-03-01T09:05:07.123456-03:00`
    /// reads as `2024-03-01 09:05:07`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimestamp` if the prefix is missing or
    /// does not parse.
    pub fn parse_iso_prefix(raw: &str) -> DomainResult<Self> {
        let prefix = raw
            .get(..TIMESTAMP_PREFIX_LEN)
            .ok_or_else(|| DomainError::InvalidTimestamp(raw.to_string()))?;
        NaiveDateTime::parse_from_str(prefix, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::InvalidTimestamp(raw.to_string()))
    }

    /// Moves the clock forward by exactly one second.
    ///
    /// Rolls over minutes, hours and days the way a calendar does.
    pub fn advance(&mut self) {
        self.0 = self
            .0
            .checked_add_signed(TimeDelta::seconds(1))
            .unwrap_or(self.0);
    }

    /// The underlying date-time.
    #[must_use]
    pub const fn datetime(&self) -> NaiveDateTime {
        self.0
    }
}

/// Formats as zero-padded `HH:MM:SS`.
impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

/// A single authoritative time reading fetched for one timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSnapshot {
    timezone: TimezoneId,
    utc_offset: String,
    server_time: WallClock,
}

impl TimeSnapshot {
    /// Creates a snapshot from already validated parts.
    #[must_use]
    pub fn new(timezone: TimezoneId, utc_offset: impl Into<String>, server_time: WallClock) -> Self {
        Self {
            timezone,
            utc_offset: utc_offset.into(),
            server_time,
        }
    }

    /// Builds a snapshot from the raw fields the time service reports.
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone is blank or the datetime is
    /// unreadable.
    pub fn from_raw(timezone: &str, utc_offset: &str, datetime: &str) -> DomainResult<Self> {
        Ok(Self::new(
            TimezoneId::new(timezone)?,
            utc_offset,
            WallClock::parse_iso_prefix(datetime)?,
        ))
    }

    /// The canonical timezone the service answered for.
    #[must_use]
    pub const fn timezone(&self) -> &TimezoneId {
        &self.timezone
    }

    /// Raw offset as reported, e.g. `-03:00`.
    #[must_use]
    pub fn utc_offset(&self) -> &str {
        &self.utc_offset
    }

    /// Offset as shown to the user, e.g. `UTC -03:00`.
    #[must_use]
    pub fn utc_offset_label(&self) -> String {
        format!("UTC {}", self.utc_offset)
    }

    /// The server's wall-clock time at fetch.
    #[must_use]
    pub const fn server_time(&self) -> WallClock {
        self.server_time
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn clock(raw: &str) -> WallClock {
        WallClock::parse_iso_prefix(raw).unwrap()
    }

    #[test]
    fn test_parse_ignores_fraction_and_offset() {
        let parsed = clock("2024-03-01T09:05:07.123456-03:00");
        assert_eq!(parsed, clock("2024-03-01T09:05:07"));
        assert_eq!(parsed.to_string(), "09:05:07");
    }

    #[test]
    fn test_parse_rejects_short_or_garbled_input() {
        assert!(matches!(
            WallClock::parse_iso_prefix("2024-03-01T09:05"),
            Err(DomainError::InvalidTimestamp(_))
        ));
        assert!(WallClock::parse_iso_prefix("not a timestamp at all").is_err());
        assert!(WallClock::parse_iso_prefix("").is_err());
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(clock("2024-01-01T01:02:05").to_string(), "01:02:05");
        assert_eq!(clock("2024-01-01T00:00:00").to_string(), "00:00:00");
    }

    #[test]
    fn test_advance_adds_one_second() {
        let mut c = clock("2024-01-01T10:00:05");
        c.advance();
        assert_eq!(c.to_string(), "10:00:06");
    }

    #[test]
    fn test_advance_rolls_over_minute_and_hour() {
        let mut c = clock("2024-01-01T10:59:59");
        c.advance();
        assert_eq!(c.to_string(), "11:00:00");
    }

    #[test]
    fn test_advance_rolls_over_midnight_into_next_day() {
        let mut c = clock("2024-02-29T23:59:59");
        c.advance();
        assert_eq!(c.to_string(), "00:00:00");
        assert_eq!(c, clock("2024-03-01T00:00:00"));
    }

    #[test]
    fn test_snapshot_labels() {
        let snapshot =
            TimeSnapshot::from_raw("America/Sao_Paulo", "-03:00", "2024-05-10T14:30:00.5-03:00")
                .unwrap();
        assert_eq!(snapshot.timezone().as_str(), "America/Sao_Paulo");
        assert_eq!(snapshot.utc_offset(), "-03:00");
        assert_eq!(snapshot.utc_offset_label(), "UTC -03:00");
        assert_eq!(snapshot.server_time().to_string(), "14:30:00");
    }

    #[test]
    fn test_snapshot_rejects_bad_parts() {
        assert!(TimeSnapshot::from_raw("", "+00:00", "2024-05-10T14:30:00").is_err());
        assert!(TimeSnapshot::from_raw("UTC", "+00:00", "yesterday").is_err());
    }
}
