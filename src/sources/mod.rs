pub mod file;
pub mod fixture;
pub mod http;
pub mod traits;

pub use file::JsonFileSource;
pub use fixture::FixtureSource;
pub use http::HttpSource;
pub use traits::PropertySource;

use crate::models::{validate_collection, ModelError, PropertyRecord};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("listing endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed listing data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid listing data: {0}")]
    Invalid(#[from] ModelError),
}

/// Runs collection-level validation against `today` before handing records out.
pub(crate) fn validated_on(
    source: &str,
    records: Vec<PropertyRecord>,
    today: NaiveDate,
) -> Result<Vec<PropertyRecord>, SourceError> {
    if let Err(err) = validate_collection(&records, today) {
        warn!(source, error = %err, "rejecting listing collection");
        return Err(err.into());
    }
    Ok(records)
}

pub(crate) fn validated(source: &str, records: Vec<PropertyRecord>) -> Result<Vec<PropertyRecord>, SourceError> {
    validated_on(source, records, Local::now().date_naive())
}
