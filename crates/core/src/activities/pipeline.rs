//! Activity aggregation.
//!
//! Projects the four category sequences into one feed sorted by date,
//! most recent first.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::activities_model::Activity;
use crate::records::{Category, CategoryRecord};
use crate::snapshot::CategorySequences;

/// Naive timestamp layouts accepted after RFC 3339 and plain dates fail.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Builds the unified activity feed.
///
/// Categories are concatenated in [`Category::ALL`] order, each keeping its own
/// record order, then stably sorted by descending date. Records without a
/// parseable date sort after every dated record and keep their relative order.
pub fn build_activities(sequences: &CategorySequences) -> Vec<Activity> {
    let mut activities: Vec<Activity> = Vec::with_capacity(sequences.total_len());

    for category in Category::ALL {
        activities.extend(
            sequences
                .get(category)
                .iter()
                .map(|record| project(category, record)),
        );
    }

    // `sort_by` is stable; `None` orders below every `Some`.
    activities.sort_by(|a, b| b.sort_date.cmp(&a.sort_date));
    activities
}

/// Annotates one record with its category's display metadata.
pub fn project(category: Category, record: &Arc<CategoryRecord>) -> Activity {
    Activity {
        source: category,
        label: category.label(),
        icon: category.icon(),
        category: record.derived_category(),
        record: Arc::clone(record),
        sort_date: record.date().and_then(parse_record_date),
    }
}

/// Parses a record date. Accepts `YYYY-MM-DD`, RFC 3339 and naive
/// `YYYY-MM-DD[T ]HH:MM:SS[.fff]` (read as UTC).
pub fn parse_record_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive));
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}
