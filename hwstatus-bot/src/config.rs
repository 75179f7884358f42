//! Bot configuration
//!
//! Credentials are required; every other parameter has a default that
//! matches the production review API and messaging API.

use chrono::TimeDelta;
use hwstatus_core::VerdictTable;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

const DEFAULT_RETRY_SECS: u64 = 600;
const DEFAULT_LOOKBACK_DAYS: i64 = 30;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const MAX_LOOKBACK_DAYS: i64 = 36_500;

/// Errors raised while loading or validating the configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("{0} must start with http:// or https://")]
    InvalidUrl(&'static str),

    #[error("{0} is out of range")]
    InvalidValue(&'static str),
}

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Bot token for the messaging API
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Full URL of the homework statuses endpoint
    pub practicum_endpoint: String,

    /// Base URL of the messaging API
    pub telegram_api_url: String,

    /// Pause between two poll iterations
    pub retry_interval: Duration,

    /// How far back the first query looks
    pub lookback: TimeDelta,

    /// Per-request timeout for both APIs
    pub http_timeout: Duration,

    /// Status code to verdict mapping
    pub verdicts: VerdictTable,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(
        practicum_token: String,
        telegram_token: String,
        telegram_chat_id: String,
    ) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint: DEFAULT_PRACTICUM_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            retry_interval: Duration::from_secs(DEFAULT_RETRY_SECS),
            lookback: TimeDelta::days(DEFAULT_LOOKBACK_DAYS),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            verdicts: VerdictTable::default(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional)
    /// - RETRY_TIME (optional, seconds, default: 600)
    /// - LOOKBACK_DAYS (optional, default: 30)
    /// - HTTP_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// Blank values count as missing. All missing credentials are reported
    /// together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let practicum_token = get("PRACTICUM_TOKEN");
        let telegram_token = get("TELEGRAM_TOKEN");
        let telegram_chat_id = get("TELEGRAM_CHAT_ID");

        let (practicum_token, telegram_token, telegram_chat_id) =
            match (practicum_token, telegram_token, telegram_chat_id) {
                (Some(practicum), Some(telegram), Some(chat_id)) => (practicum, telegram, chat_id),
                (practicum, telegram, chat_id) => {
                    let missing = [
                        ("PRACTICUM_TOKEN", practicum.is_none()),
                        ("TELEGRAM_TOKEN", telegram.is_none()),
                        ("TELEGRAM_CHAT_ID", chat_id.is_none()),
                    ]
                    .into_iter()
                    .filter_map(|(name, absent)| absent.then_some(name))
                    .collect();
                    return Err(ConfigError::MissingCredentials(missing));
                }
            };

        let mut config = Self::new(practicum_token, telegram_token, telegram_chat_id);

        if let Some(endpoint) = get("PRACTICUM_ENDPOINT") {
            config.practicum_endpoint = endpoint;
        }

        if let Some(api_url) = get("TELEGRAM_API_URL") {
            config.telegram_api_url = api_url;
        }

        if let Some(secs) = get("RETRY_TIME").and_then(|s| s.parse::<u64>().ok()) {
            config.retry_interval = Duration::from_secs(secs);
        }

        if let Some(days) = get("LOOKBACK_DAYS").and_then(|s| s.parse::<u32>().ok()) {
            config.lookback = TimeDelta::days(i64::from(days));
        }

        if let Some(secs) = get("HTTP_TIMEOUT").and_then(|s| s.parse::<u64>().ok()) {
            config.http_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing: Vec<_> = [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials(missing));
        }

        for (name, url) in [
            ("PRACTICUM_ENDPOINT", &self.practicum_endpoint),
            ("TELEGRAM_API_URL", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(name));
            }
        }

        if self.retry_interval.is_zero() {
            return Err(ConfigError::InvalidValue("RETRY_TIME"));
        }

        if self.http_timeout.is_zero() {
            return Err(ConfigError::InvalidValue("HTTP_TIMEOUT"));
        }

        if self.lookback < TimeDelta::zero()
            || self.lookback > TimeDelta::days(MAX_LOOKBACK_DAYS)
        {
            return Err(ConfigError::InvalidValue("LOOKBACK_DAYS"));
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_interval", &self.retry_interval)
            .field("lookback", &self.lookback)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}
