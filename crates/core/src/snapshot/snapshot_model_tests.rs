use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::records::{Category, CategoryRecord};

fn record(category: Category, value: serde_json::Value) -> CategoryRecord {
    CategoryRecord::from_raw(category, value.as_object().cloned().unwrap()).unwrap()
}

fn sample() -> Snapshot {
    let mut sequences = CategorySequences::new();
    sequences.set(
        Category::Hotel,
        vec![Arc::new(record(
            Category::Hotel,
            json!({"name": "Corinthia", "city": "Tripoli", "rating": 5, "date": "2024-02-01", "status": "active"}),
        ))],
    );
    sequences.set(
        Category::Restaurant,
        vec![
            Arc::new(record(
                Category::Restaurant,
                json!({"name": "Al Kabir", "city": "Benghazi", "cuisine": "ليبي", "date": "2024-04-10"}),
            )),
            Arc::new(record(Category::Restaurant, json!({"name": "Zaytouna"}))),
        ],
    );
    Snapshot::build(sequences, None)
}

#[test]
fn test_empty_snapshot() {
    let snapshot = Snapshot::empty();
    assert!(snapshot.activities().is_empty());
    assert!(snapshot.records().is_empty());
    assert!(snapshot.loaded_at().is_none());
    assert!(snapshot.stats().iter().all(|s| s.count == 0));
}

#[test]
fn test_activity_count_matches_records() {
    let snapshot = sample();
    assert_eq!(snapshot.activities().len(), snapshot.records().total_len());
    assert_eq!(snapshot.activities().len(), 3);
}

#[test]
fn test_set_drops_records_of_other_categories() {
    let mut sequences = CategorySequences::new();
    sequences.set(
        Category::Beach,
        vec![
            Arc::new(record(Category::Beach, json!({"name": "ok"}))),
            Arc::new(record(Category::Hotel, json!({"name": "wrong"}))),
        ],
    );
    assert_eq!(sequences.len(Category::Beach), 1);
    assert_eq!(sequences.len(Category::Hotel), 0);
}

#[test]
fn test_with_prepended_rebuilds_feed_and_leaves_original() {
    let snapshot = sample();
    let added = record(
        Category::Hotel,
        json!({"name": "New", "date": "2024-03-01"}),
    );

    let next = snapshot.with_prepended(added);

    assert_eq!(snapshot.records().len(Category::Hotel), 1);
    assert_eq!(next.records().len(Category::Hotel), 2);
    assert_eq!(next.records().get(Category::Hotel)[0].name(), Some("New"));
    assert_eq!(next.activities().len(), 4);

    // Placed by date, between the April restaurant and the February hotel.
    let names: Vec<_> = next.activities().iter().map(|a| a.name().unwrap()).collect();
    assert_eq!(names, vec!["Al Kabir", "New", "Corinthia", "Zaytouna"]);
}

#[test]
fn test_top_activities_clamps() {
    let snapshot = sample();
    assert_eq!(snapshot.top_activities(2).len(), 2);
    assert_eq!(snapshot.top_activities(50).len(), 3);
    assert!(snapshot.top_activities(0).is_empty());
}

#[test]
fn test_stats_in_enumeration_order() {
    let stats = sample().stats();
    let counts: Vec<_> = stats.iter().map(|s| (s.label, s.count, s.color)).collect();
    assert_eq!(
        counts,
        vec![
            ("الفنادق", 1, "#1a5276"),
            ("الشواطئ", 0, "#2980b9"),
            ("المطاعم", 2, "#f39c12"),
            ("المواقع الثقافية", 0, "#27ae60"),
        ]
    );
}

#[test]
fn test_search_matches_visible_text() {
    let snapshot = sample();

    let found = snapshot.search("TRIPOLI");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), Some("Corinthia"));

    // Derived category and status text are searchable too.
    assert_eq!(snapshot.search("5 نجوم").len(), 1);
    assert_eq!(snapshot.search("نشط").len(), 1);
    // Missing city renders as "غير محدد".
    assert_eq!(snapshot.search("غير محدد").len(), 1);

    assert_eq!(snapshot.search("").len(), 3);
    assert!(snapshot.search("misrata").is_empty());
}

#[test]
fn test_serializes_categories_and_activities() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(value["hotels"].as_array().unwrap().len(), 1);
    assert_eq!(value["restaurants"][1]["name"], "Zaytouna");
    assert_eq!(value["culturalSites"].as_array().unwrap().len(), 0);
    assert_eq!(value["activities"][0]["source"], "restaurant");
    assert!(value["loadedAt"].is_null());
}
