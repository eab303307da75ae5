//! Server configuration parsed from environment variables.

use chunks::model::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use chunks::scale::ScoreScale;

use crate::error::ErrorCode;

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A variable required by the selected data source is not set.
    #[error("missing config: env var {var} not set")]
    Missing { var: &'static str },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "E_CONFIG_PARSE",
            Self::Missing { .. } => "E_CONFIG_MISSING",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchProxyConfig {
    pub base_url: String,
    pub scale: ScoreScale,
    pub timeouts: ProxyTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSourceConfig {
    Mock,
    SearchProxy(SearchProxyConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub port: u16,
    pub source: DataSourceConfig,
    pub default_page_size: u32,
}

impl DashboardConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DATA_SOURCE`: `mock` (default) or `search`
    /// - `DEFAULT_PAGE_SIZE`: default 10, capped at 100
    ///
    /// With `DATA_SOURCE=search`:
    /// - `SEARCH_PROXY_URL` (required)
    /// - `SEARCH_PROXY_SCORE_SCALE`: `unit` (default) or `ten`
    /// - `SEARCH_PROXY_REQUEST_TIMEOUT_SECS`: default 30
    /// - `SEARCH_PROXY_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparseable value or a missing proxy URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Parse(format!("invalid PORT: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };
        let default_page_size = u32::try_from(env_parse_u64("DEFAULT_PAGE_SIZE", u64::from(DEFAULT_PAGE_SIZE)))
            .unwrap_or(MAX_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let source = parse_source(std::env::var("DATA_SOURCE").ok().as_deref())?;

        Ok(Self { port, source, default_page_size })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_source(raw: Option<&str>) -> Result<DataSourceConfig, ConfigError> {
    match raw.map(str::trim).unwrap_or("mock") {
        "mock" => Ok(DataSourceConfig::Mock),
        "search" => Ok(DataSourceConfig::SearchProxy(search_proxy_from_env()?)),
        other => Err(ConfigError::Parse(format!("unknown DATA_SOURCE: {other}"))),
    }
}

fn search_proxy_from_env() -> Result<SearchProxyConfig, ConfigError> {
    let base_url = std::env::var("SEARCH_PROXY_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing { var: "SEARCH_PROXY_URL" })?;
    let scale = parse_scale(std::env::var("SEARCH_PROXY_SCORE_SCALE").ok().as_deref())?;
    let timeouts = ProxyTimeouts {
        request_secs: env_parse_u64("SEARCH_PROXY_REQUEST_TIMEOUT_SECS", DEFAULT_PROXY_REQUEST_TIMEOUT_SECS),
        connect_secs: env_parse_u64("SEARCH_PROXY_CONNECT_TIMEOUT_SECS", DEFAULT_PROXY_CONNECT_TIMEOUT_SECS),
    };
    Ok(SearchProxyConfig { base_url, scale, timeouts })
}

fn parse_scale(raw: Option<&str>) -> Result<ScoreScale, ConfigError> {
    match raw {
        None => Ok(ScoreScale::default()),
        Some(value) => ScoreScale::parse(value).ok_or_else(|| {
            ConfigError::Parse(format!(
                "unsupported SEARCH_PROXY_SCORE_SCALE '{value}' (expected 'unit' or 'ten')"
            ))
        }),
    }
}
