//! Tourism Atlas Source Data Crate
//!
//! This crate fetches the raw tourism datasets (hotels, beaches, restaurants,
//! cultural sites) that feed the dashboard.
//!
//! # Overview
//!
//! Every dataset is a JSON array of objects published in a Git repository.
//! Fetching one resource walks a fallback chain:
//!
//! ```text
//! +------------------+   fails   +------------------+   fails   +------------------+
//! |   RemoteSource   | --------> | LocalFileSource  | --------> |  empty default   |
//! | (raw repo / proxy)|          |  (data/<file>)   |           |       []         |
//! +------------------+           +------------------+           +------------------+
//! ```
//!
//! Ordinary failures (HTTP status, transport, malformed body, missing file) never
//! escape the [`SourceFetcher`]; they are logged and recorded in
//! [`FetchDiagnostics`]. Only errors classified as [`FailureClass::Propagate`]
//! reach the caller.
//!
//! # Core Types
//!
//! - [`SourceFetcher`] - Fallback chain over [`DataSource`] implementations
//! - [`ResourceFetcher`] - Trait consumed by the domain layer
//! - [`SourceConfig`] - Endpoint, proxy and fallback settings
//! - [`RawRecord`] - One untyped JSON object from a dataset
//! - [`FetchOutcome`] - Records plus the origin that served them

pub mod errors;
pub mod fetcher;
pub mod models;
pub mod source;

pub use errors::{FailureClass, SourceError};
pub use fetcher::{FetchDiagnostics, FetchOutcome, ResourceFetcher, SourceAttempt, SourceFetcher};
pub use models::{FetchOrigin, RawRecord, SourceConfig, SourceId};
pub use source::{DataSource, LocalFileSource, RemoteSource};
