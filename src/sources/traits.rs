use crate::models::PropertyRecord;
use crate::sources::SourceError;
use async_trait::async_trait;

/// Common trait for everything that can supply the listing collection
/// This allows swapping the built-in sample data for a file or remote store
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Load and validate the full listing collection
    async fn load(&self) -> Result<Vec<PropertyRecord>, SourceError>;

    /// Get the name of the source, used in log lines
    fn source_name(&self) -> &'static str;
}
