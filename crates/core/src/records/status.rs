use serde::{Deserialize, Serialize};

/// Review status shown as a badge in the activity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    #[default]
    Pending,
    Inactive,
}

impl RecordStatus {
    /// Missing or unrecognized values read as `Pending`.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("active") => Self::Active,
            Some("inactive") => Self::Inactive,
            _ => Self::Pending,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Inactive => "inactive",
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Self::Active => "نشط",
            Self::Pending => "قيد المراجعة",
            Self::Inactive => "غير نشط",
        }
    }
}
