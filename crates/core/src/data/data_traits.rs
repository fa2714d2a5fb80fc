use async_trait::async_trait;

use crate::errors::Result;
use crate::snapshot::Snapshot;

/// Trait defining the contract for loading the dashboard dataset.
#[async_trait]
pub trait DataServiceTrait: Send + Sync {
    /// Fetches every category and assembles a fresh snapshot.
    ///
    /// Ordinary fetch failures leave a category empty. Only configuration
    /// problems and propagated source errors fail the load.
    async fn load_all(&self) -> Result<Snapshot>;
}
