//! Activity domain models.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};

use crate::constants::UNSPECIFIED_TEXT;
use crate::records::{Category, CategoryRecord, RecordStatus};

/// A record annotated for the unified feed.
///
/// Shares the backing record with the snapshot it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub source: Category,
    pub label: &'static str,
    pub icon: &'static str,
    /// Derived category string ("4 نجوم", "شاطئ عام", ...).
    pub category: String,
    pub record: Arc<CategoryRecord>,
    /// Parsed `date`, `None` when missing or unparseable.
    pub sort_date: Option<DateTime<Utc>>,
}

impl Activity {
    pub fn name(&self) -> Option<&str> {
        self.record.name()
    }

    pub fn date(&self) -> Option<&str> {
        self.record.date()
    }

    pub fn status(&self) -> RecordStatus {
        self.record.status()
    }

    /// Display row for the activity table.
    pub fn row(&self) -> ActivityRow {
        let status = self.status();
        ActivityRow {
            label: self.label,
            icon: self.icon,
            name: self.name().unwrap_or_default().to_string(),
            city: self.record.city().unwrap_or(UNSPECIFIED_TEXT).to_string(),
            category: self.category.clone(),
            status_class: status.css_class(),
            status_text: status.display_text(),
            date: self.date().unwrap_or(UNSPECIFIED_TEXT).to_string(),
        }
    }

    /// Case-insensitive match against the row's visible text.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty() || self.row().search_text().contains(&term)
    }
}

/// Serialized as the record's own attributes overlaid with `type` (label),
/// `icon`, `category` (derived) and `source` (category key).
impl Serialize for Activity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut attributes = match serde_json::to_value(self.record.as_ref()) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) => serde_json::Map::new(),
            Err(e) => return Err(S::Error::custom(e)),
        };
        attributes.insert("type".to_string(), self.label.into());
        attributes.insert("icon".to_string(), self.icon.into());
        attributes.insert("category".to_string(), self.category.clone().into());
        attributes.insert("source".to_string(), self.source.key().into());

        let mut map = serializer.serialize_map(Some(attributes.len()))?;
        for (key, value) in &attributes {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One line of the activity table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRow {
    pub label: &'static str,
    pub icon: &'static str,
    pub name: String,
    pub city: String,
    pub category: String,
    pub status_class: &'static str,
    pub status_text: &'static str,
    pub date: String,
}

impl ActivityRow {
    /// Lowercased text of every visible cell, space separated.
    pub fn search_text(&self) -> String {
        [
            self.label,
            self.name.as_str(),
            self.city.as_str(),
            self.category.as_str(),
            self.status_text,
            self.date.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}
