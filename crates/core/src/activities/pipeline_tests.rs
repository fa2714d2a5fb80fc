//! Tests for the activity aggregation pipeline.
//!
//! # Contract Points
//!
//! 1. Output length equals the sum of the category lengths
//! 2. Descending date order, stable for equal dates
//! 3. Undated or unparseable records sort after every dated record
//! 4. Ties keep the hotel → beach → restaurant → cultural site concatenation order

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use serde_json::json;

use super::*;
use crate::records::{Category, CategoryRecord};
use crate::snapshot::CategorySequences;

fn record(category: Category, name: &str, date: Option<&str>) -> Arc<CategoryRecord> {
    let mut raw = json!({ "name": name }).as_object().cloned().unwrap();
    if let Some(date) = date {
        raw.insert("date".to_string(), date.into());
    }
    Arc::new(CategoryRecord::from_raw(category, raw).unwrap())
}

fn names(activities: &[Activity]) -> Vec<&str> {
    activities.iter().map(|a| a.name().unwrap()).collect()
}

// =========================================================================
// Examples
// =========================================================================

#[test]
fn test_beach_newer_than_hotel_comes_first() {
    let mut sequences = CategorySequences::new();
    sequences.set(
        Category::Hotel,
        vec![record(Category::Hotel, "A", Some("2024-01-01"))],
    );
    sequences.set(
        Category::Beach,
        vec![record(Category::Beach, "B", Some("2024-06-01"))],
    );

    let activities = build_activities(&sequences);

    assert_eq!(names(&activities), vec!["B", "A"]);
    assert_eq!(activities[0].source, Category::Beach);
    assert_eq!(activities[0].label, "شاطئ");
    assert_eq!(activities[0].icon, "fas fa-umbrella-beach");
    assert_eq!(activities[0].category, "شاطئ عام");
    assert_eq!(activities[1].source, Category::Hotel);
    assert_eq!(activities[1].category, "غير مصنف");
}

#[test]
fn test_empty_input_gives_empty_feed() {
    assert!(build_activities(&CategorySequences::new()).is_empty());
}

#[test]
fn test_undated_records_sort_last_in_concatenation_order() {
    let mut sequences = CategorySequences::new();
    sequences.set(
        Category::Hotel,
        vec![
            record(Category::Hotel, "h-undated", None),
            record(Category::Hotel, "h-old", Some("1999-12-31")),
        ],
    );
    sequences.set(
        Category::Restaurant,
        vec![record(Category::Restaurant, "r-garbage", Some("soon"))],
    );
    sequences.set(
        Category::CulturalSite,
        vec![record(Category::CulturalSite, "c-new", Some("2025-02-01"))],
    );

    let activities = build_activities(&sequences);

    assert_eq!(
        names(&activities),
        vec!["c-new", "h-old", "h-undated", "r-garbage"]
    );
}

#[test]
fn test_pre_epoch_dates_still_beat_missing_dates() {
    let mut sequences = CategorySequences::new();
    sequences.set(
        Category::Beach,
        vec![
            record(Category::Beach, "undated", None),
            record(Category::Beach, "ancient", Some("1951-12-24")),
        ],
    );

    let activities = build_activities(&sequences);
    assert_eq!(names(&activities), vec!["ancient", "undated"]);
}

#[test]
fn test_equal_dates_keep_category_order() {
    let mut sequences = CategorySequences::new();
    for category in Category::ALL.into_iter().rev() {
        sequences.set(
            category,
            vec![record(category, category.key(), Some("2024-03-01"))],
        );
    }

    let activities = build_activities(&sequences);
    assert_eq!(
        names(&activities),
        vec!["hotel", "beach", "restaurant", "culturalSite"]
    );
}

#[test]
fn test_input_is_not_mutated() {
    let mut sequences = CategorySequences::new();
    sequences.set(
        Category::Hotel,
        vec![
            record(Category::Hotel, "old", Some("2020-01-01")),
            record(Category::Hotel, "new", Some("2024-01-01")),
        ],
    );
    let before = sequences.clone();

    let activities = build_activities(&sequences);

    assert_eq!(sequences, before);
    assert_eq!(names(&activities), vec!["new", "old"]);
    assert!(Arc::ptr_eq(
        &activities[1].record,
        &sequences.get(Category::Hotel)[0]
    ));
}

#[test]
fn test_activity_serializes_with_overlay() {
    let raw = json!({
        "name": "Farwa",
        "city": "Zuwara",
        "type": "رملي",
        "date": "2024-07-01",
        "photos": 3
    });
    let record =
        Arc::new(CategoryRecord::from_raw(Category::Beach, raw.as_object().cloned().unwrap()).unwrap());
    let activity = project(Category::Beach, &record);

    let value = serde_json::to_value(&activity).unwrap();
    assert_eq!(value["name"], "Farwa");
    assert_eq!(value["type"], "شاطئ");
    assert_eq!(value["category"], "رملي");
    assert_eq!(value["icon"], "fas fa-umbrella-beach");
    assert_eq!(value["source"], "beach");
    assert_eq!(value["photos"], 3);
}

#[test]
fn test_activity_row_fallbacks() {
    let activity = project(Category::Restaurant, &record(Category::Restaurant, "Al Saraya", None));
    let row = activity.row();

    assert_eq!(row.city, "غير محدد");
    assert_eq!(row.date, "غير محدد");
    assert_eq!(row.category, "متنوع");
    assert_eq!(row.status_text, "قيد المراجعة");
}

// =========================================================================
// Date parsing
// =========================================================================

#[test]
fn test_parse_record_date_formats() {
    let midnight = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    assert_eq!(parse_record_date("2024-06-01"), Some(midnight));
    assert_eq!(parse_record_date(" 2024-06-01 "), Some(midnight));
    assert_eq!(
        parse_record_date("2024-06-01T12:30:00Z"),
        Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap())
    );
    assert_eq!(
        parse_record_date("2024-06-01T14:30:00+02:00"),
        Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap())
    );
    assert_eq!(
        parse_record_date("2024-06-01 08:15:00"),
        Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 15, 0).unwrap())
    );
    assert_eq!(parse_record_date(""), None);
    assert_eq!(parse_record_date("2024-13-01"), None);
    assert_eq!(parse_record_date("yesterday"), None);
}

// =========================================================================
// Properties
// =========================================================================

fn date_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("not a date".to_string())),
        (2018u32..2026, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| Some(format!("{:04}-{:02}-{:02}", y, m, d))),
    ]
}

fn sequences_strategy() -> impl Strategy<Value = Vec<Vec<Option<String>>>> {
    prop::collection::vec(prop::collection::vec(date_strategy(), 0..12), 4)
}

/// Builds sequences whose record names are their index in concatenation order.
fn build_indexed(dates: &[Vec<Option<String>>]) -> CategorySequences {
    let mut sequences = CategorySequences::new();
    let mut index = 0usize;
    for (category, category_dates) in Category::ALL.into_iter().zip(dates) {
        let records = category_dates
            .iter()
            .map(|date| {
                let r = record(category, &index.to_string(), date.as_deref());
                index += 1;
                r
            })
            .collect();
        sequences.set(category, records);
    }
    sequences
}

proptest! {
    #[test]
    fn prop_length_is_sum_of_inputs(dates in sequences_strategy()) {
        let sequences = build_indexed(&dates);
        let expected: usize = dates.iter().map(Vec::len).sum();
        prop_assert_eq!(build_activities(&sequences).len(), expected);
    }

    #[test]
    fn prop_sorted_descending_and_stable(dates in sequences_strategy()) {
        let sequences = build_indexed(&dates);
        let activities = build_activities(&sequences);

        for pair in activities.windows(2) {
            prop_assert!(pair[0].sort_date >= pair[1].sort_date);
            if pair[0].sort_date == pair[1].sort_date {
                let first: usize = pair[0].name().unwrap().parse().unwrap();
                let second: usize = pair[1].name().unwrap().parse().unwrap();
                prop_assert!(first < second);
            }
        }
    }

    #[test]
    fn prop_undated_after_dated(dates in sequences_strategy()) {
        let sequences = build_indexed(&dates);
        let activities = build_activities(&sequences);

        if let Some(first_undated) = activities.iter().position(|a| a.sort_date.is_none()) {
            prop_assert!(activities[first_undated..].iter().all(|a| a.sort_date.is_none()));
        }
    }
}
