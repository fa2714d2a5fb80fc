use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use futures::future::join_all;
use log::{debug, info, warn};
use tourism_source_data::{FetchOutcome, ResourceFetcher, SourceFetcher};

use super::data_traits::DataServiceTrait;
use crate::config::TourismConfig;
use crate::errors::Result;
use crate::records::{Category, CategoryRecord};
use crate::snapshot::{CategorySequences, Snapshot};

/// Loads the four datasets through a [`ResourceFetcher`].
pub struct DataService {
    fetcher: Arc<dyn ResourceFetcher>,
    config: TourismConfig,
}

impl DataService {
    pub fn new(fetcher: Arc<dyn ResourceFetcher>, config: TourismConfig) -> Self {
        Self { fetcher, config }
    }

    /// Builds the remote → local fallback chain described by `config`.
    pub fn from_config(config: TourismConfig) -> Self {
        let fetcher = Arc::new(SourceFetcher::from_config(&config.source));
        Self::new(fetcher, config)
    }

    pub fn config(&self) -> &TourismConfig {
        &self.config
    }

    /// Parses one category's raw records. Odd-typed attributes never drop a
    /// record; anything serde still refuses is logged and left out.
    fn parse_records(category: Category, outcome: FetchOutcome) -> Vec<Arc<CategoryRecord>> {
        let total = outcome.records.len();
        let records: Vec<_> = outcome
            .records
            .into_iter()
            .filter_map(|raw| match CategoryRecord::from_raw(category, raw) {
                Ok(record) => Some(Arc::new(record)),
                Err(e) => {
                    warn!("Skipping record: {}", e);
                    None
                }
            })
            .collect();

        if records.len() < total {
            warn!(
                "Kept {} of {} {} records",
                records.len(),
                total,
                category.dataset_key()
            );
        }
        records
    }
}

#[async_trait]
impl DataServiceTrait for DataService {
    async fn load_all(&self) -> Result<Snapshot> {
        self.config.validate()?;

        let fetches = Category::ALL.into_iter().map(|category| {
            let filename = self.config.files.get(category);
            async move {
                (
                    category,
                    self.fetcher.fetch_with_diagnostics(filename).await,
                )
            }
        });
        // Settle every fetch before inspecting any result.
        let results = join_all(fetches).await;

        let mut sequences = CategorySequences::new();
        for (category, result) in results {
            let outcome = result?;
            info!(
                "Loaded {} {} records from {}",
                outcome.records.len(),
                category.dataset_key(),
                outcome.origin.as_str()
            );
            debug!(
                "{} fetch: {}",
                category.dataset_key(),
                outcome.diagnostics.summary()
            );
            sequences.set(category, Self::parse_records(category, outcome));
        }

        Ok(Snapshot::build(sequences, Some(Utc::now())))
    }
}
