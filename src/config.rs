use crate::filters::SortKey;
use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const RENTALS_DATA_PATH: &str = "RENTALS_DATA_PATH";
pub const RENTALS_DATA_URL: &str = "RENTALS_DATA_URL";
pub const RENTALS_DEFAULT_SORT: &str = "RENTALS_DEFAULT_SORT";
pub const RENTALS_HTTP_TIMEOUT_SECS: &str = "RENTALS_HTTP_TIMEOUT_SECS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid HTTP timeout: {0}")]
    InvalidTimeout(#[from] ParseIntError),
    #[error("HTTP timeout must be at least one second")]
    ZeroTimeout,
    #[error("Set either RENTALS_DATA_PATH or RENTALS_DATA_URL, not both")]
    ConflictingSources,
}

/// Where the listing collection comes from
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Fixture,
    File(PathBuf),
    Url(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_source: DataSource,
    pub default_sort: SortKey,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: DataSource::Fixture,
            default_sort: SortKey::Newest,
            http_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_source(None, None)
    }

    /// Like [`Config::from_env`], but a `--data` path or `--url` from the
    /// command line replaces whatever data source the environment names.
    pub fn from_env_with_source(
        path: Option<PathBuf>,
        url: Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::from_lookup_with_source(|key| env::var(key).ok(), path, url)
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Self::from_lookup_with_source(lookup, None, None)
    }

    /// Command-line source values win over the environment; the env conflict
    /// check only applies when neither is given.
    pub fn from_lookup_with_source(
        lookup: impl Fn(&str) -> Option<String>,
        path: Option<PathBuf>,
        url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let data_source = match (path, url) {
            (Some(path), _) => DataSource::File(path),
            (None, Some(url)) => DataSource::Url(url),
            (None, None) => match (get(RENTALS_DATA_PATH), get(RENTALS_DATA_URL)) {
                (Some(_), Some(_)) => return Err(ConfigError::ConflictingSources),
                (Some(path), None) => DataSource::File(PathBuf::from(path)),
                (None, Some(url)) => DataSource::Url(url),
                (None, None) => DataSource::Fixture,
            },
        };

        // Unknown sort names fall back to newest, same as the search form
        let default_sort = get(RENTALS_DEFAULT_SORT)
            .map(|v| SortKey::parse(&v))
            .unwrap_or_default();

        let http_timeout = match get(RENTALS_HTTP_TIMEOUT_SECS) {
            Some(raw) => {
                let secs = raw.parse::<u64>()?;
                if secs == 0 {
                    return Err(ConfigError::ZeroTimeout);
                }
                Duration::from_secs(secs)
            }
            None => Config::default().http_timeout,
        };

        Ok(Config {
            data_source,
            default_sort,
            http_timeout,
        })
    }
}
