//! Runtime configuration.
//!
//! Built-in defaults overlaid by `WORLDCLOCK_*` environment variables:
//!
//! | variable | default |
//! |---|---|
//! | `WORLDCLOCK_API_BASE_URL` | `https://worldtimeapi.org/api` |
//! | `WORLDCLOCK_REQUEST_TIMEOUT_SECS` | `10` |
//! | `WORLDCLOCK_USER_AGENT` | `WorldClock/<version>` |

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Default location of the time service.
pub const DEFAULT_API_BASE_URL: &str = "https://worldtimeapi.org/api";

const DEFAULT_REQUEST_TIMEOUT_SECS: i64 = 10;

const ENV_PREFIX: &str = "WORLDCLOCK";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a value has the wrong type.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// A value was read but is not acceptable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the world clock.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClockConfig {
    /// Base URL of the time service; `/timezone` is appended to it.
    pub api_base_url: Url,
    /// Per-request timeout, in seconds.
    pub request_timeout_secs: u64,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl ClockConfig {
    /// Loads configuration from defaults and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Loads configuration from defaults and the given variables instead
    /// of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: ::config::Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::load(Some(vars))
    }

    fn load(vars: Option<::config::Map<String, String>>) -> Result<Self, ConfigError> {
        let settings = ::config::Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("user_agent", default_user_agent())?
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.api_base_url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must be http or https, got {}",
                self.api_base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_user_agent() -> String {
    format!("WorldClock/{}", env!("CARGO_PKG_VERSION"))
}
