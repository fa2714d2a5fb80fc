//! Typed dataset records.
//!
//! Each category has its own record struct with the attributes the dashboard
//! understands. Everything else in the source object is kept in `extra` and
//! written back out untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tourism_source_data::RawRecord;

use super::category::Category;
use super::lenient::{self, non_blank};
use super::status::RecordStatus;
use crate::constants::DATE_FORMAT;
use crate::errors::{Error, Result, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelRecord {
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Star rating, e.g. `"4"`.
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeachRecord {
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Beach type, e.g. `"رملي"`.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CulturalSiteRecord {
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Site type, e.g. `"أثري"`.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: RawRecord,
}

/// A record tagged with the category it belongs to.
///
/// Serializes as the inner record's attributes, without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CategoryRecord {
    Hotel(HotelRecord),
    Beach(BeachRecord),
    Restaurant(RestaurantRecord),
    CulturalSite(CulturalSiteRecord),
}

/// Applies `$body` to whichever record struct the variant holds. All four
/// structs share the common attribute names.
macro_rules! on_record {
    ($record:expr, $inner:ident => $body:expr) => {
        match $record {
            CategoryRecord::Hotel($inner) => $body,
            CategoryRecord::Beach($inner) => $body,
            CategoryRecord::Restaurant($inner) => $body,
            CategoryRecord::CulturalSite($inner) => $body,
        }
    };
}

impl CategoryRecord {
    /// Reads a raw dataset object as a record of `category`.
    ///
    /// A recognized attribute holding a boolean, array or object reads as
    /// absent and is kept with the pass-through attributes.
    pub fn from_raw(category: Category, raw: RawRecord) -> Result<Self> {
        let displaced: Vec<(String, serde_json::Value)> = raw
            .iter()
            .filter(|(_, value)| lenient::is_displaced(value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let value = serde_json::Value::Object(raw);
        let malformed = |e: serde_json::Error| {
            Error::Validation(ValidationError::MalformedRecord {
                category: category.key().to_string(),
                message: e.to_string(),
            })
        };
        let mut record = match category {
            Category::Hotel => Self::Hotel(serde_json::from_value(value).map_err(malformed)?),
            Category::Beach => Self::Beach(serde_json::from_value(value).map_err(malformed)?),
            Category::Restaurant => {
                Self::Restaurant(serde_json::from_value(value).map_err(malformed)?)
            }
            Category::CulturalSite => {
                Self::CulturalSite(serde_json::from_value(value).map_err(malformed)?)
            }
        };

        let extra = record.extra_mut();
        for (key, value) in displaced {
            extra.entry(key).or_insert(value);
        }
        Ok(record)
    }

    /// Back to an untyped object, pass-through attributes included.
    pub fn to_raw(&self) -> RawRecord {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => RawRecord::new(),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Hotel(_) => Category::Hotel,
            Self::Beach(_) => Category::Beach,
            Self::Restaurant(_) => Category::Restaurant,
            Self::CulturalSite(_) => Category::CulturalSite,
        }
    }

    pub fn name(&self) -> Option<&str> {
        on_record!(self, r => r.name.as_deref())
    }

    pub fn city(&self) -> Option<&str> {
        on_record!(self, r => r.city.as_deref())
    }

    pub fn status(&self) -> RecordStatus {
        RecordStatus::from_attribute(on_record!(self, r => r.status.as_deref()))
    }

    pub fn date(&self) -> Option<&str> {
        on_record!(self, r => r.date.as_deref())
    }

    pub fn extra(&self) -> &RawRecord {
        on_record!(self, r => &r.extra)
    }

    fn extra_mut(&mut self) -> &mut RawRecord {
        on_record!(self, r => &mut r.extra)
    }

    /// The attribute the category string is derived from: rating for hotels,
    /// type for beaches and cultural sites, cuisine for restaurants.
    pub fn deriving_attribute(&self) -> Option<&str> {
        match self {
            Self::Hotel(r) => r.rating.as_deref(),
            Self::Beach(r) => r.kind.as_deref(),
            Self::Restaurant(r) => r.cuisine.as_deref(),
            Self::CulturalSite(r) => r.kind.as_deref(),
        }
    }

    /// Human-readable category string, or the category's fallback when the
    /// deriving attribute is absent or blank.
    pub fn derived_category(&self) -> String {
        match (self, non_blank(self.deriving_attribute())) {
            (Self::Hotel(_), Some(rating)) => format!("{} نجوم", rating),
            (_, Some(value)) => value.to_string(),
            (_, None) => self.category().fallback_category().to_string(),
        }
    }

    /// Sets `date` to `today` when the record carries no date.
    pub fn stamp_date_if_missing(&mut self, today: NaiveDate) {
        on_record!(self, r => {
            if non_blank(r.date.as_deref()).is_none() {
                r.date = Some(today.format(DATE_FORMAT).to_string());
                r.extra.remove("date");
            }
        })
    }
}
