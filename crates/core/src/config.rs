//! Dashboard configuration.

use serde::{Deserialize, Serialize};
use tourism_source_data::SourceConfig;

use crate::errors::{Error, Result};
use crate::records::Category;

/// Dataset filename per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFiles {
    pub hotels: String,
    pub beaches: String,
    pub restaurants: String,
    pub cultural_sites: String,
}

impl Default for CategoryFiles {
    fn default() -> Self {
        Self {
            hotels: "Inotels.json".to_string(),
            beaches: "viligags.json".to_string(),
            restaurants: "restaurants.json".to_string(),
            cultural_sites: "cultural_sites.json".to_string(),
        }
    }
}

impl CategoryFiles {
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Hotel => &self.hotels,
            Category::Beach => &self.beaches,
            Category::Restaurant => &self.restaurants,
            Category::CulturalSite => &self.cultural_sites,
        }
    }
}

/// Read-only configuration for loading the four datasets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourismConfig {
    pub source: SourceConfig,
    pub files: CategoryFiles,
}

impl TourismConfig {
    /// Checks that every value needed to address a dataset is present.
    pub fn validate(&self) -> Result<()> {
        if self.source.repository.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "repository must not be empty".to_string(),
            ));
        }
        if self.source.branch.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "branch must not be empty".to_string(),
            ));
        }
        for category in Category::ALL {
            if self.files.get(category).trim().is_empty() {
                return Err(Error::InvalidConfigValue(format!(
                    "filename for {} must not be empty",
                    category.dataset_key()
                )));
            }
        }
        Ok(())
    }
}
