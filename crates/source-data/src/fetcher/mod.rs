//! Fallback-chain fetching.
//!
//! The fetcher walks its sources in order and returns the first dataset that
//! decodes. When every source fails with a fallback-class error the empty
//! default is served instead.

mod diagnostics;
mod source_fetcher;

pub use diagnostics::{FetchDiagnostics, SourceAttempt};
pub use source_fetcher::{FetchOutcome, ResourceFetcher, SourceFetcher};
