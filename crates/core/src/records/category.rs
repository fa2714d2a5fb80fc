//! The four fixed dataset categories and their display metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// One of the four entity kinds, in aggregation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    #[serde(alias = "hotels")]
    Hotel,
    #[serde(alias = "beaches")]
    Beach,
    #[serde(alias = "restaurants")]
    Restaurant,
    #[serde(alias = "culturalSites")]
    CulturalSite,
}

impl Category {
    /// Fixed enumeration order used when concatenating activities.
    pub const ALL: [Category; 4] = [
        Category::Hotel,
        Category::Beach,
        Category::Restaurant,
        Category::CulturalSite,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Beach => "beach",
            Self::Restaurant => "restaurant",
            Self::CulturalSite => "culturalSite",
        }
    }

    /// Key of the category's dataset in the data-file mapping.
    pub fn dataset_key(&self) -> &'static str {
        match self {
            Self::Hotel => "hotels",
            Self::Beach => "beaches",
            Self::Restaurant => "restaurants",
            Self::CulturalSite => "culturalSites",
        }
    }

    /// Singular label shown next to each activity.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hotel => "فندق",
            Self::Beach => "شاطئ",
            Self::Restaurant => "مطعم",
            Self::CulturalSite => "موقع ثقافي",
        }
    }

    /// Plural label used by the statistics cards and the chart legend.
    pub fn plural_label(&self) -> &'static str {
        match self {
            Self::Hotel => "الفنادق",
            Self::Beach => "الشواطئ",
            Self::Restaurant => "المطاعم",
            Self::CulturalSite => "المواقع الثقافية",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Hotel => "fas fa-hotel",
            Self::Beach => "fas fa-umbrella-beach",
            Self::Restaurant => "fas fa-utensils",
            Self::CulturalSite => "fas fa-landmark",
        }
    }

    pub fn chart_color(&self) -> &'static str {
        match self {
            Self::Hotel => "#1a5276",
            Self::Beach => "#2980b9",
            Self::Restaurant => "#f39c12",
            Self::CulturalSite => "#27ae60",
        }
    }

    /// Derived category used when the deriving attribute is absent or blank.
    pub fn fallback_category(&self) -> &'static str {
        match self {
            Self::Hotel => "غير مصنف",
            Self::Beach => "شاطئ عام",
            Self::Restaurant => "متنوع",
            Self::CulturalSite => "موقع تاريخي",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s || c.dataset_key() == s)
            .ok_or_else(|| Error::Validation(ValidationError::UnknownCategory(s.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_singular_and_plural_keys() {
        assert_eq!("hotel".parse::<Category>().unwrap(), Category::Hotel);
        assert_eq!("beaches".parse::<Category>().unwrap(), Category::Beach);
        assert_eq!(
            "culturalSites".parse::<Category>().unwrap(),
            Category::CulturalSite
        );
        assert!("museum".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_accepts_aliases() {
        let c: Category = serde_json::from_str("\"restaurants\"").unwrap();
        assert_eq!(c, Category::Restaurant);
        assert_eq!(
            serde_json::to_string(&Category::CulturalSite).unwrap(),
            "\"culturalSite\""
        );
    }

    #[test]
    fn test_enumeration_order() {
        assert_eq!(
            Category::ALL.map(|c| c.key()),
            ["hotel", "beach", "restaurant", "culturalSite"]
        );
    }
}
