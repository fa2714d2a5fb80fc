use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDate;
use log::{debug, error, info};

use super::dashboard_model::DashboardSummary;
use crate::activities::Activity;
use crate::constants::REFRESH_ERROR_MESSAGE;
use crate::data::DataServiceTrait;
use crate::errors::Result;
use crate::export::{prepare_export, ExportBundle, ExportRequest};
use crate::records::{Category, CategoryRecord};
use crate::snapshot::{CategoryStat, Snapshot};

/// What the dashboard is serving: the dataset and the outcome of the last
/// refresh. Always replaced under one lock.
struct Current {
    snapshot: Arc<Snapshot>,
    last_error: Option<String>,
}

/// Holds the current [`Snapshot`] and serves every dashboard read.
///
/// The snapshot is only ever replaced whole, so a reader sees either the old
/// or the new dataset, never a mix. Overlapping refreshes are not serialized;
/// whichever finishes last is kept.
pub struct DashboardState {
    data_service: Arc<dyn DataServiceTrait>,
    current: RwLock<Current>,
}

impl DashboardState {
    /// Starts with an empty snapshot. Call [`refresh`](Self::refresh) to load.
    pub fn new(data_service: Arc<dyn DataServiceTrait>) -> Self {
        Self {
            data_service,
            current: RwLock::new(Current {
                snapshot: Arc::new(Snapshot::empty()),
                last_error: None,
            }),
        }
    }

    /// Reloads every category and swaps in the result.
    ///
    /// On failure the previous snapshot stays in place and
    /// [`last_error`](Self::last_error) carries the user-facing message.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>> {
        debug!("Refreshing dashboard data");
        match self.data_service.load_all().await {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                *self.current.write().unwrap_or_else(PoisonError::into_inner) = Current {
                    snapshot: snapshot.clone(),
                    last_error: None,
                };
                info!(
                    "Dashboard refreshed: {} activities",
                    snapshot.activities().len()
                );
                Ok(snapshot)
            }
            Err(e) => {
                error!("Dashboard refresh failed: {}", e);
                self.current
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .last_error = Some(REFRESH_ERROR_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Prepends `record` to its category and rebuilds the activity feed.
    pub fn add_record(&self, record: CategoryRecord) -> Arc<Snapshot> {
        let category = record.category();
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(current.snapshot.with_prepended(record));
        current.snapshot = next.clone();
        drop(current);
        debug!(
            "Added {} record, {} now {}",
            category.key(),
            category.dataset_key(),
            next.records().len(category)
        );
        next
    }

    /// The snapshot currently being served.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot
            .clone()
    }

    pub fn top_activities(&self, n: usize) -> Vec<Activity> {
        self.snapshot().top_activities(n).to_vec()
    }

    pub fn all_activities(&self) -> Vec<Activity> {
        self.snapshot().activities().to_vec()
    }

    pub fn records(&self, category: Category) -> Vec<Arc<CategoryRecord>> {
        self.snapshot().records().get(category).to_vec()
    }

    pub fn counts(&self) -> Vec<(Category, usize)> {
        let snapshot = self.snapshot();
        Category::ALL
            .into_iter()
            .map(|category| (category, snapshot.records().len(category)))
            .collect()
    }

    /// Chart data: label, count and color per category.
    pub fn breakdown(&self) -> Vec<CategoryStat> {
        self.snapshot().stats()
    }

    pub fn search(&self, term: &str) -> Vec<Activity> {
        self.snapshot().search(term)
    }

    pub fn last_error(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last_error
            .clone()
    }

    /// Counts, top `top_n` activities and status, read from one snapshot
    /// together with the error recorded alongside it.
    pub fn summary(&self, top_n: usize) -> DashboardSummary {
        let (snapshot, error) = {
            let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
            (current.snapshot.clone(), current.last_error.clone())
        };
        DashboardSummary {
            stats: snapshot.stats(),
            total_activities: snapshot.activities().len(),
            top_activities: snapshot.top_activities(top_n).to_vec(),
            loaded_at: snapshot.loaded_at(),
            error,
        }
    }

    /// Prepares report data for the current snapshot.
    pub fn export(&self, request: &ExportRequest, today: NaiveDate) -> Result<ExportBundle> {
        prepare_export(&self.snapshot(), request, today)
    }
}
