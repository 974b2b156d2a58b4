use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_GENERATION_DELAY_MS: u64 = 300;
const DEFAULT_LOG_FILTER: &str = "info";

/// # Service Configuration
///
/// Read from the process environment after `.env` has been loaded.
///
/// | Variable | Default |
/// |---|---|
/// | `HOST` | `127.0.0.1` |
/// | `PORT` | `8080` |
/// | `GENERATION_DELAY_MS` | `300` |
/// | `RUST_LOG` | `info` |
///
/// `GENERATION_DELAY_MS` is the pause the REST variations endpoint takes
/// before generating, so clients can show a loading state. `0` disables it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub generation_delay: Duration,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            generation_delay: Duration::from_millis(DEFAULT_GENERATION_DELAY_MS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Missing or blank values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            host: value("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", value("PORT"), DEFAULT_PORT)?,
            generation_delay: Duration::from_millis(parse_or(
                "GENERATION_DELAY_MS",
                value("GENERATION_DELAY_MS"),
                DEFAULT_GENERATION_DELAY_MS,
            )?),
            log_filter: value("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    /// Generation delay in whole milliseconds, saturating at `u64::MAX`.
    pub fn generation_delay_ms(&self) -> u64 {
        u64::try_from(self.generation_delay.as_millis()).unwrap_or(u64::MAX)
    }

    /// Same configuration with the artificial generation delay removed.
    pub fn without_delay(mut self) -> Self {
        self.generation_delay = Duration::ZERO;
        self
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
