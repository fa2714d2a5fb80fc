//! Source fetcher orchestrating the remote → local → empty chain.

use std::borrow::Cow;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, warn};

use crate::errors::{FailureClass, SourceError};
use crate::models::{FetchOrigin, RawRecord, SourceConfig, SourceId};
use crate::source::{DataSource, LocalFileSource, RemoteSource};

use super::FetchDiagnostics;

/// Result of walking the chain for one resource.
#[derive(Clone, Debug)]
pub struct FetchOutcome {
    pub records: Vec<RawRecord>,
    pub origin: FetchOrigin,
    pub diagnostics: FetchDiagnostics,
}

/// Fetches a named resource, never failing for ordinary fetch errors.
///
/// Consumed by the domain layer so the whole chain can be replaced in tests.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetch a resource, reporting which step served it.
    ///
    /// Returns `Err` only for [`FailureClass::Propagate`] errors.
    async fn fetch_with_diagnostics(&self, filename: &str) -> Result<FetchOutcome, SourceError>;

    /// Fetch a resource's records.
    async fn fetch(&self, filename: &str) -> Result<Vec<RawRecord>, SourceError> {
        Ok(self.fetch_with_diagnostics(filename).await?.records)
    }
}

/// Fallback chain over [`DataSource`]s.
pub struct SourceFetcher {
    sources: Vec<Arc<dyn DataSource>>,
}

impl SourceFetcher {
    /// Create a fetcher that tries `sources` in order.
    pub fn new(sources: Vec<Arc<dyn DataSource>>) -> Self {
        Self { sources }
    }

    /// Remote source first, then the local directory when fallback is enabled.
    pub fn from_config(config: &SourceConfig) -> Self {
        let mut sources: Vec<Arc<dyn DataSource>> =
            vec![Arc::new(RemoteSource::new(config.clone()))];
        if config.fallback_to_local {
            let local = LocalFileSource::new(&config.local_data_dir);
            debug!("Local fallback directory: {}", local.dir().display());
            sources.push(Arc::new(local));
        }
        Self::new(sources)
    }

    pub fn source_ids(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.id()).collect()
    }
}

#[async_trait]
impl ResourceFetcher for SourceFetcher {
    async fn fetch_with_diagnostics(&self, filename: &str) -> Result<FetchOutcome, SourceError> {
        if filename.trim().is_empty() {
            return Err(SourceError::InvalidRequest(
                "resource filename is empty".to_string(),
            ));
        }

        let mut diagnostics = FetchDiagnostics::new();

        for source in &self.sources {
            let source_id: SourceId = Cow::Borrowed(source.id());

            match source.fetch(filename).await {
                Ok(records) => {
                    debug!(
                        "Loaded {} records for '{}' from {}",
                        records.len(),
                        filename,
                        source_id
                    );
                    diagnostics.record_success(source_id, records.len());
                    return Ok(FetchOutcome {
                        records,
                        origin: source.origin(),
                        diagnostics,
                    });
                }
                Err(e) => match e.failure_class() {
                    FailureClass::Fallback => {
                        warn!("Failed to load '{}' from {}: {}", filename, source_id, e);
                        diagnostics.record_error(source_id, e.to_string());
                    }
                    FailureClass::Propagate => {
                        error!(
                            "Unrecoverable error loading '{}' from {}: {}",
                            filename, source_id, e
                        );
                        return Err(e);
                    }
                },
            }
        }

        diagnostics.record_default();
        warn!(
            "All sources failed for '{}', serving empty dataset. Diagnostics: {}",
            filename,
            diagnostics.summary()
        );

        Ok(FetchOutcome {
            records: Vec::new(),
            origin: FetchOrigin::Default,
            diagnostics,
        })
    }
}
