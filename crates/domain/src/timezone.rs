//! Timezone identifiers and the catalog offered to the user.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Canonical name of a timezone as the time service knows it,
/// e.g. `America/Sao_Paulo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimezoneId(String);

impl TimezoneId {
    /// Creates an identifier, rejecting empty or blank input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if `id` is blank.
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidTimezone(id));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The `UTC` zone, used when nothing better is known.
    #[must_use]
    pub fn utc() -> Self {
        Self(String::from("UTC"))
    }

    /// Returns the identifier exactly as the time service expects it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable form: every `_` becomes a space.
    #[must_use]
    pub fn display_label(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl fmt::Display for TimezoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TimezoneId {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<TimezoneId> for String {
    fn from(id: TimezoneId) -> Self {
        id.0
    }
}

/// One entry of the selection input: the value sent to the time service
/// and the label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneOption {
    /// Identifier used for fetching.
    pub value: TimezoneId,
    /// Display label.
    pub label: String,
}

impl From<&TimezoneId> for TimezoneOption {
    fn from(id: &TimezoneId) -> Self {
        Self {
            value: id.clone(),
            label: id.display_label(),
        }
    }
}

/// The ordered set of timezones offered to the user, together with the
/// timezone detected on the local machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneCatalog {
    zones: Vec<TimezoneId>,
    local: TimezoneId,
}

impl TimezoneCatalog {
    /// Creates a catalog. Order of `zones` is preserved.
    #[must_use]
    pub const fn new(zones: Vec<TimezoneId>, local: TimezoneId) -> Self {
        Self { zones, local }
    }

    /// Timezones in catalog order.
    #[must_use]
    pub fn zones(&self) -> &[TimezoneId] {
        &self.zones
    }

    /// The timezone detected on the local machine.
    #[must_use]
    pub const fn local(&self) -> &TimezoneId {
        &self.local
    }

    /// Number of offered timezones.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns true if nothing is offered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Looks up a timezone by its position in the selection input.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TimezoneId> {
        self.zones.get(index)
    }

    /// Options for the selection input, in catalog order.
    #[must_use]
    pub fn options(&self) -> Vec<TimezoneOption> {
        self.zones.iter().map(TimezoneOption::from).collect()
    }

    /// Position of the local timezone, if the catalog offers it.
    ///
    /// `None` means the selection starts out empty.
    #[must_use]
    pub fn initial_index(&self) -> Option<usize> {
        self.zones.iter().position(|zone| zone == &self.local)
    }

    /// The timezone the selection starts out with, if any.
    #[must_use]
    pub fn initial_selection(&self) -> Option<&TimezoneId> {
        self.initial_index().and_then(|index| self.zones.get(index))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tz(id: &str) -> TimezoneId {
        TimezoneId::new(id).unwrap()
    }

    #[test]
    fn test_timezone_id_rejects_blank() {
        assert!(matches!(
            TimezoneId::new(""),
            Err(DomainError::InvalidTimezone(_))
        ));
        assert!(TimezoneId::new("   ").is_err());
    }

    #[test]
    fn test_display_label_replaces_every_underscore() {
        assert_eq!(tz("America/Sao_Paulo").display_label(), "America/Sao Paulo");
        assert_eq!(
            tz("America/Argentina/Rio_Gallegos").display_label(),
            "America/Argentina/Rio Gallegos"
        );
        assert_eq!(tz("Etc/GMT_plus_3").display_label(), "Etc/GMT plus 3");
    }

    #[test]
    fn test_option_keeps_underscored_value() {
        let option = TimezoneOption::from(&tz("America/Los_Angeles"));
        assert_eq!(option.value.as_str(), "America/Los_Angeles");
        assert_eq!(option.label, "America/Los Angeles");
    }

    #[test]
    fn test_deserialize_rejects_empty_identifier() {
        let ok: Vec<TimezoneId> = serde_json::from_str(r#"["Europe/Lisbon","UTC"]"#).unwrap();
        assert_eq!(ok, vec![tz("Europe/Lisbon"), tz("UTC")]);

        let bad: Result<Vec<TimezoneId>, _> = serde_json::from_str(r#"["Europe/Lisbon",""]"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_catalog_options_in_order() {
        let catalog = TimezoneCatalog::new(
            vec![tz("Asia/Tokyo"), tz("America/New_York"), tz("Europe/Paris")],
            tz("UTC"),
        );
        let labels: Vec<_> = catalog.options().into_iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["Asia/Tokyo", "America/New York", "Europe/Paris"]);
    }

    #[test]
    fn test_initial_selection_is_local_when_offered() {
        let catalog = TimezoneCatalog::new(
            vec![tz("Asia/Tokyo"), tz("America/Sao_Paulo")],
            tz("America/Sao_Paulo"),
        );
        assert_eq!(catalog.initial_index(), Some(1));
        assert_eq!(catalog.initial_selection(), Some(&tz("America/Sao_Paulo")));
    }

    #[test]
    fn test_initial_selection_empty_when_local_missing() {
        let catalog = TimezoneCatalog::new(vec![tz("Asia/Tokyo")], tz("Mars/Olympus_Mons"));
        assert_eq!(catalog.initial_index(), None);
        assert_eq!(catalog.initial_selection(), None);
    }
}
