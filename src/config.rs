use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://pgapp.mssonukr.workers.dev";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Where listings come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Bundled seed data, served instantly.
    Static,
    /// Bundled seed data behind a simulated delay.
    Mock,
    /// The real listings backend.
    Http,
}

impl FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(DataSource::Static),
            "mock" => Ok(DataSource::Mock),
            "http" | "api" => Ok(DataSource::Http),
            other => Err(format!("expected static, mock or http, got {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub data_source: DataSource,
    pub api_base_url: String,
    pub featured_limit: usize,
    pub nearest_limit: usize,
    pub http_timeout: Duration,
    pub mock_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            data_source: DataSource::Static,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            featured_limit: 3,
            nearest_limit: 10,
            http_timeout: Duration::from_secs(15),
            mock_delay: Duration::from_millis(700),
        }
    }
}

impl Config {
    /// Reads `PG_*` variables from the process environment. Call
    /// `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but with an injectable lookup, so tests
    /// don't have to touch process-global state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Self {
            bind_addr: parse_or(&lookup, "PG_BIND_ADDR", defaults.bind_addr)?,
            max_workers: parse_or(&lookup, "PG_MAX_WORKERS", defaults.max_workers)?,
            data_source: parse_or(&lookup, "PG_DATA_SOURCE", defaults.data_source)?,
            api_base_url: lookup("PG_API_BASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.api_base_url),
            featured_limit: parse_or(&lookup, "PG_FEATURED_LIMIT", defaults.featured_limit)?,
            nearest_limit: parse_or(&lookup, "PG_NEAREST_LIMIT", defaults.nearest_limit)?,
            http_timeout: parse_or(&lookup, "PG_HTTP_TIMEOUT_SECS", 15u64)
                .map(Duration::from_secs)?,
            mock_delay: parse_or(&lookup, "PG_MOCK_DELAY_MS", 700u64)
                .map(Duration::from_millis)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: value.clone(),
            reason: e.to_string(),
        }),
    }
}
