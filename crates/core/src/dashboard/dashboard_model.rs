use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::activities::Activity;
use crate::snapshot::CategoryStat;

/// Everything the dashboard page renders in one read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Per-category counts with chart label and color.
    pub stats: Vec<CategoryStat>,
    pub total_activities: usize,
    pub top_activities: Vec<Activity>,
    pub loaded_at: Option<DateTime<Utc>>,
    /// Message of the last failed refresh.
    pub error: Option<String>,
}
