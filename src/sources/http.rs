use crate::models::PropertyRecord;
use crate::sources::traits::PropertySource;
use crate::sources::{validated, SourceError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches listings as a JSON array from a remote endpoint
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a source with the default 30s timeout
    pub fn new(url: impl Into<String>) -> Result<Self, SourceError> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rental-listings/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PropertySource for HttpSource {
    async fn load(&self) -> Result<Vec<PropertyRecord>, SourceError> {
        info!("Fetching listings from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            warn!("Listing endpoint returned status: {}", response.status());
            return Err(SourceError::Status(response.status()));
        }

        let body = response.text().await?;
        debug!("Downloaded {} bytes of listing JSON", body.len());

        let records: Vec<PropertyRecord> = serde_json::from_str(&body)?;
        validated(self.source_name(), records)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
