//! Snapshot domain models.
//!
//! A [`Snapshot`] is immutable once built. Changing any category produces a
//! new snapshot with a freshly built activity feed, so the feed can never
//! drift from the records it was derived from.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::activities::{build_activities, Activity};
use crate::records::{Category, CategoryRecord};

/// One record sequence per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySequences {
    hotels: Vec<Arc<CategoryRecord>>,
    beaches: Vec<Arc<CategoryRecord>>,
    restaurants: Vec<Arc<CategoryRecord>>,
    cultural_sites: Vec<Arc<CategoryRecord>>,
}

impl CategorySequences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> &[Arc<CategoryRecord>] {
        match category {
            Category::Hotel => &self.hotels,
            Category::Beach => &self.beaches,
            Category::Restaurant => &self.restaurants,
            Category::CulturalSite => &self.cultural_sites,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<Arc<CategoryRecord>> {
        match category {
            Category::Hotel => &mut self.hotels,
            Category::Beach => &mut self.beaches,
            Category::Restaurant => &mut self.restaurants,
            Category::CulturalSite => &mut self.cultural_sites,
        }
    }

    /// Replaces a category's sequence. Records of another category are dropped.
    pub fn set(&mut self, category: Category, records: Vec<Arc<CategoryRecord>>) {
        *self.get_mut(category) = records
            .into_iter()
            .filter(|r| r.category() == category)
            .collect();
    }

    /// Inserts a record at the front of its own category's sequence.
    pub fn prepend(&mut self, record: Arc<CategoryRecord>) {
        self.get_mut(record.category()).insert(0, record);
    }

    pub fn len(&self, category: Category) -> usize {
        self.get(category).len()
    }

    pub fn total_len(&self) -> usize {
        Category::ALL.iter().map(|c| self.len(*c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }
}

/// Count of one category, with chart metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
    pub color: &'static str,
}

/// The complete in-memory dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(flatten)]
    records: CategorySequences,
    activities: Vec<Activity>,
    loaded_at: Option<DateTime<Utc>>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl Snapshot {
    /// The snapshot in place before the first successful load.
    pub fn empty() -> Self {
        Self {
            records: CategorySequences::default(),
            activities: Vec::new(),
            loaded_at: None,
        }
    }

    /// Builds a snapshot, deriving the activity feed from `records`.
    pub fn build(records: CategorySequences, loaded_at: Option<DateTime<Utc>>) -> Self {
        let activities = build_activities(&records);
        Self {
            records,
            activities,
            loaded_at,
        }
    }

    /// A new snapshot with `record` at the front of its category and the feed
    /// rebuilt. `self` is left untouched.
    pub fn with_prepended(&self, record: CategoryRecord) -> Self {
        let mut records = self.records.clone();
        records.prepend(Arc::new(record));
        Self::build(records, self.loaded_at)
    }

    pub fn records(&self) -> &CategorySequences {
        &self.records
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn top_activities(&self, n: usize) -> &[Activity] {
        &self.activities[..n.min(self.activities.len())]
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Per-category counts in enumeration order.
    pub fn stats(&self) -> Vec<CategoryStat> {
        Category::ALL
            .into_iter()
            .map(|category| CategoryStat {
                category,
                label: category.plural_label(),
                count: self.records.len(category),
                color: category.chart_color(),
            })
            .collect()
    }

    /// Activities whose visible row text contains `term`, case-insensitively.
    pub fn search(&self, term: &str) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|activity| activity.matches(term))
            .cloned()
            .collect()
    }
}
