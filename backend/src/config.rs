use crate::application::paging::{EndOfPaginationPolicy, PagingConfig, DEFAULT_PAGE_SIZE};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/";
pub const DEFAULT_DATABASE_PATH: &str = "news_db.sqlite";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {name}")]
    MissingEnvironmentVariable { name: String },

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

impl ConfigError {
    pub fn missing_env_var<N: Into<String>>(name: N) -> Self {
        Self::MissingEnvironmentVariable { name: name.into() }
    }

    pub fn invalid_value<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Runtime settings, read from `NEWS_*` environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub database_path: PathBuf,
    pub request_timeout: Duration,
    pub paging: PagingConfig,
}

impl AppConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = get("NEWS_API_KEY").ok_or_else(|| ConfigError::missing_env_var("NEWS_API_KEY"))?;
        let base_url = get("NEWS_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::invalid_value(
                "NEWS_API_BASE_URL",
                format!("expected an http(s) URL, got '{}'", base_url),
            ));
        }

        let database_path = get("NEWS_DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

        let page_size = match get("NEWS_PAGE_SIZE") {
            Some(value) => match value.parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::invalid_value(
                        "NEWS_PAGE_SIZE",
                        format!("expected a positive integer, got '{}'", value),
                    ))
                }
            },
            None => DEFAULT_PAGE_SIZE,
        };

        let timeout_secs = match get("NEWS_REQUEST_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::invalid_value(
                        "NEWS_REQUEST_TIMEOUT_SECS",
                        format!("expected a positive number of seconds, got '{}'", value),
                    ))
                }
            },
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let end_of_pagination = match get("NEWS_END_OF_PAGINATION") {
            Some(value) => value
                .parse::<EndOfPaginationPolicy>()
                .map_err(|e| ConfigError::invalid_value("NEWS_END_OF_PAGINATION", e.to_string()))?,
            None => EndOfPaginationPolicy::default(),
        };

        Ok(AppConfig {
            api_key,
            base_url,
            database_path,
            request_timeout: Duration::from_secs(timeout_secs),
            paging: PagingConfig {
                page_size,
                end_of_pagination,
            },
        })
    }
}
