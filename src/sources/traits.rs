use crate::models::Space;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for anything that yields the list of rentable spaces
#[async_trait]
pub trait SpaceSource: Send + Sync {
    /// Load every valid space from the source
    async fn load(&self) -> Result<Vec<Space>>;

    /// Get the name of the source, for logging
    fn source_name(&self) -> &'static str;
}
