//! Source data models
//!
//! - `types` - Type aliases (SourceId, RawRecord)
//! - `config` - Endpoint and fallback configuration (SourceConfig)
//! - `origin` - Which step of the fallback chain served a dataset (FetchOrigin)

mod config;
mod origin;
mod types;

pub use config::{
    SourceConfig, DEFAULT_BRANCH, DEFAULT_LOCAL_DATA_DIR, DEFAULT_PROXY_PREFIX,
    DEFAULT_REMOTE_BASE_URL, DEFAULT_REPOSITORY,
};
pub use origin::FetchOrigin;
pub use types::{RawRecord, SourceId};
