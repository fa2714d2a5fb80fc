//! Tourism Atlas Core - Domain records, activity aggregation and dashboard state.
//!
//! This crate turns the four raw tourism datasets into the dashboard's unified
//! activity feed. Fetching is delegated to the `tourism-source-data` crate
//! through the [`ResourceFetcher`](tourism_source_data::ResourceFetcher) trait.

pub mod activities;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod data;
pub mod errors;
pub mod export;
pub mod records;
pub mod snapshot;

// Re-export the types most callers need
pub use activities::{build_activities, Activity, ActivityRow};
pub use config::{CategoryFiles, TourismConfig};
pub use dashboard::{DashboardState, DashboardSummary};
pub use export::{prepare_export, ExportBundle, ExportRequest, ExportScope};
pub use data::{DataService, DataServiceTrait};
pub use records::{Category, CategoryRecord, RecordStatus};
pub use snapshot::{CategorySequences, CategoryStat, Snapshot};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
