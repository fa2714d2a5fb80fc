//! Dataset source trait definitions.

use async_trait::async_trait;

use crate::errors::SourceError;
use crate::models::{FetchOrigin, RawRecord};

/// One step of the fallback chain.
///
/// Implementations fetch a named dataset and decode it into raw records. They
/// do not fall back themselves; that is the fetcher's job.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Unique identifier for this source, used in logs and diagnostics.
    fn id(&self) -> &'static str;

    /// Which step of the fallback chain this source stands for.
    fn origin(&self) -> FetchOrigin;

    /// Fetch and decode one dataset.
    ///
    /// # Arguments
    ///
    /// * `filename` - The dataset filename (e.g. `restaurants.json`)
    async fn fetch(&self, filename: &str) -> Result<Vec<RawRecord>, SourceError>;
}
