use serde::{Deserialize, Serialize};

/// Which step of the fallback chain produced a dataset.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FetchOrigin {
    /// The remote repository (direct or through the proxy).
    Remote,
    /// The local data directory.
    Local,
    /// Both sources failed or were disabled; the dataset is empty.
    Default,
}

impl FetchOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Local => "local",
            Self::Default => "default",
        }
    }
}
