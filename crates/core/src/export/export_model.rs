use serde::{Deserialize, Serialize};

use crate::records::Category;

/// Which part of the dataset a report covers.
///
/// Read leniently: any unrecognized value means the whole activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ExportScope {
    Hotels,
    Beaches,
    Restaurants,
    Cultural,
    #[default]
    All,
}

impl From<&str> for ExportScope {
    fn from(value: &str) -> Self {
        match value.trim() {
            "hotels" => Self::Hotels,
            "beaches" => Self::Beaches,
            "restaurants" => Self::Restaurants,
            "cultural" => Self::Cultural,
            _ => Self::All,
        }
    }
}

impl From<String> for ExportScope {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl ExportScope {
    /// The single category covered, `None` for the full feed.
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Hotels => Some(Category::Hotel),
            Self::Beaches => Some(Category::Beach),
            Self::Restaurants => Some(Category::Restaurant),
            Self::Cultural => Some(Category::CulturalSite),
            Self::All => None,
        }
    }

    /// Segment inserted into the report file name.
    pub fn file_suffix(&self) -> Option<&'static str> {
        match self {
            Self::Hotels => Some("الفنادق"),
            Self::Beaches => Some("الشواطئ"),
            Self::Restaurants => Some("المطاعم"),
            Self::Cultural => Some("المواقع_الثقافية"),
            Self::All => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(default)]
    pub scope: ExportScope,
    /// Requested format label, e.g. `"pdf"`. Not interpreted here.
    pub format: String,
}

/// Report data ready to be handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub file_name: String,
    pub scope: ExportScope,
    pub format: String,
    pub record_count: usize,
    pub records: Vec<serde_json::Value>,
    pub message: String,
}
