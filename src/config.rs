use crate::movies::DEFAULT_BASE_URL;
use crate::results::{ResultsConfig, SearchPolicy, UnknownSearchPolicy, DEFAULT_DISPLAY_DELAY};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a whole number of milliseconds, got {value:?}")]
    InvalidMillis { name: &'static str, value: String },
    #[error("CINEFIND_SEARCH_POLICY: {0}")]
    SearchPolicy(#[from] UnknownSearchPolicy),
}

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
/// In release builds: reads the environment only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the movies API (without the /v1/movies path)
    pub api_base_url: String,
    /// Pause between a successful response and showing it
    pub result_display_delay: Duration,
    /// How overlapping searches are resolved
    pub search_policy: SearchPolicy,
    /// HTTP timeout; transport default when unset
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            result_display_delay: DEFAULT_DISPLAY_DELAY,
            search_policy: SearchPolicy::default(),
            request_timeout: None,
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using environment only");
            }
        }

        let config = Self::from_lookup(|name| std::env::var(name).ok());
        info!(
            "Config: API {} (display delay {:?}, search policy {})",
            config.api_base_url,
            config.result_display_delay,
            config.search_policy.as_str()
        );
        config
    }

    /// Build a config from a variable lookup. Unset variables take their
    /// defaults; unparsable ones are logged and take their defaults too.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = lookup("CINEFIND_API_BASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let result_display_delay =
            match parse_millis("CINEFIND_RESULT_DISPLAY_DELAY_MS", &lookup) {
                Ok(Some(delay)) => delay,
                Ok(None) => defaults.result_display_delay,
                Err(e) => {
                    warn!("Config: {}, using default", e);
                    defaults.result_display_delay
                }
            };

        let search_policy = match lookup("CINEFIND_SEARCH_POLICY") {
            Some(value) => match value.parse::<SearchPolicy>().map_err(ConfigError::from) {
                Ok(policy) => policy,
                Err(e) => {
                    warn!("Config: {}, using default", e);
                    defaults.search_policy
                }
            },
            None => defaults.search_policy,
        };

        let request_timeout = match parse_millis("CINEFIND_REQUEST_TIMEOUT_MS", &lookup) {
            Ok(timeout) => timeout.filter(|t| !t.is_zero()),
            Err(e) => {
                warn!("Config: {}, leaving timeout unset", e);
                None
            }
        };

        Self {
            api_base_url,
            result_display_delay,
            search_policy,
            request_timeout,
        }
    }

    pub fn results_config(&self) -> ResultsConfig {
        ResultsConfig {
            display_delay: self.result_display_delay,
            search_policy: self.search_policy,
        }
    }
}

fn parse_millis(
    name: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<Option<Duration>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|_| ConfigError::InvalidMillis { name, value }),
    }
}
