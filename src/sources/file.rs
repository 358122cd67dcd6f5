use crate::models::PropertyRecord;
use crate::sources::traits::PropertySource;
use crate::sources::{validated, SourceError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads listings from a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PropertySource for JsonFileSource {
    async fn load(&self) -> Result<Vec<PropertyRecord>, SourceError> {
        info!("Reading listings from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        debug!("Read {} bytes of listing JSON", raw.len());

        let records: Vec<PropertyRecord> = serde_json::from_str(&raw)?;
        validated(self.source_name(), records)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}
