//! Time service client using reqwest.
//!
//! This adapter implements the `TimeSource` port against a
//! worldtimeapi-compatible HTTP service:
//!
//! - `GET {base}/timezone` returns a JSON array of timezone names
//! - `GET {base}/timezone/{name}` returns an object with at least
//!   `timezone`, `utc_offset` and `datetime`

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use worldclock_application::ports::{TimeSource, TimeSourceError};
use worldclock_domain::{DomainError, TimeSnapshot, TimezoneId};

use crate::settings::ClockConfig;

/// The fields of a timezone response the clock consumes.
///
/// Everything else the service reports is ignored.
#[derive(Debug, Deserialize)]
struct SnapshotBody {
    timezone: String,
    utc_offset: String,
    datetime: String,
}

impl SnapshotBody {
    fn into_snapshot(self) -> Result<TimeSnapshot, DomainError> {
        TimeSnapshot::from_raw(&self.timezone, &self.utc_offset, &self.datetime)
    }
}

/// HTTP client for the time service.
pub struct WorldTimeApiClient {
    client: Client,
    base_url: String,
}

impl WorldTimeApiClient {
    /// Creates a client configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClockConfig) -> Result<Self, TimeSourceError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| TimeSourceError::Http(e.to_string()))?;

        Ok(Self::with_client(client, &config.api_base_url))
    }

    /// Creates a client around an existing reqwest client.
    #[must_use]
    pub fn with_client(client: Client, base_url: &Url) -> Self {
        Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn timezones_url(&self) -> String {
        format!("{}/timezone", self.base_url)
    }

    fn snapshot_url(&self, timezone: &TimezoneId) -> String {
        format!("{}/timezone/{}", self.base_url, timezone.as_str())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TimeSourceError> {
        debug!(url, "requesting time service");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::map_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TimeSourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(Self::map_error)?;
        serde_json::from_str(&body).map_err(|e| TimeSourceError::Decode(e.to_string()))
    }

    /// Maps reqwest errors to `TimeSourceError`.
    fn map_error(error: reqwest::Error) -> TimeSourceError {
        if error.is_timeout() {
            TimeSourceError::Timeout
        } else {
            TimeSourceError::Http(error.to_string())
        }
    }
}

#[async_trait]
impl TimeSource for WorldTimeApiClient {
    async fn list_timezones(&self) -> Result<Vec<TimezoneId>, TimeSourceError> {
        self.get_json(&self.timezones_url()).await
    }

    async fn fetch_snapshot(&self, timezone: &TimezoneId) -> Result<TimeSnapshot, TimeSourceError> {
        let body: SnapshotBody = self.get_json(&self.snapshot_url(timezone)).await?;
        Ok(body.into_snapshot()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client(base: &str) -> WorldTimeApiClient {
        WorldTimeApiClient::with_client(Client::new(), &Url::parse(base).unwrap())
    }

    #[test]
    fn test_urls_keep_underscores_and_slashes() {
        let api = client("https://worldtimeapi.org/api");
        assert_eq!(api.timezones_url(), "https://worldtimeapi.org/api/timezone");
        assert_eq!(
            api.snapshot_url(&TimezoneId::new("America/Sao_Paulo").unwrap()),
            "https://worldtimeapi.org/api/timezone/America/Sao_Paulo"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let api = client("http://localhost:9000/api/");
        assert_eq!(api.timezones_url(), "http://localhost:9000/api/timezone");
    }

    #[test]
    fn test_snapshot_body_ignores_extra_fields() {
        let body: SnapshotBody = serde_json::from_str(
            r#"{
                "abbreviation": "-03",
                "datetime": "2024-05-10T14:30:00.123456-03:00",
                "day_of_week": 5,
                "dst": false,
                "timezone": "America/Sao_Paulo",
                "unixtime": 1715362200,
                "utc_offset": "-03:00"
            }"#,
        )
        .unwrap();

        let snapshot = body.into_snapshot().unwrap();
        assert_eq!(snapshot.timezone().as_str(), "America/Sao_Paulo");
        assert_eq!(snapshot.utc_offset_label(), "UTC -03:00");
        assert_eq!(snapshot.server_time().to_string(), "14:30:00");
    }

    #[test]
    fn test_snapshot_body_with_bad_datetime() {
        let body = SnapshotBody {
            timezone: "UTC".to_string(),
            utc_offset: "+00:00".to_string(),
            datetime: "soon".to_string(),
        };
        assert!(matches!(
            body.into_snapshot(),
            Err(DomainError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_client_creation() {
        let config = ClockConfig::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert!(WorldTimeApiClient::new(&config).is_ok());
    }
}
