//! Attempt tracking for the fallback chain.

use crate::models::SourceId;

/// Record of a single source attempt during a fetch.
#[derive(Clone, Debug)]
pub struct SourceAttempt {
    pub source_id: SourceId,
    pub error: Option<String>,
    /// Number of records served, set on success.
    pub records: Option<usize>,
}

impl SourceAttempt {
    pub fn succeeded(&self) -> bool {
        self.records.is_some()
    }
}

/// Every step the fetcher took for one resource.
#[derive(Clone, Debug, Default)]
pub struct FetchDiagnostics {
    pub attempts: Vec<SourceAttempt>,
    /// The chain was exhausted and the empty default was served.
    pub defaulted: bool,
}

impl FetchDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_error(&mut self, source_id: SourceId, error: String) {
        self.attempts.push(SourceAttempt {
            source_id,
            error: Some(error),
            records: None,
        });
    }

    pub fn record_success(&mut self, source_id: SourceId, records: usize) {
        self.attempts.push(SourceAttempt {
            source_id,
            error: None,
            records: Some(records),
        });
    }

    pub fn record_default(&mut self) {
        self.defaulted = true;
    }

    /// Summary for logging/debugging.
    pub fn summary(&self) -> String {
        let mut steps: Vec<String> = self
            .attempts
            .iter()
            .map(|a| match (&a.records, &a.error) {
                (Some(count), _) => format!("{}: SUCCESS ({} records)", a.source_id, count),
                (None, Some(err)) => format!("{}: ERROR ({})", a.source_id, err),
                (None, None) => format!("{}: UNKNOWN", a.source_id),
            })
            .collect();
        if self.defaulted {
            steps.push("DEFAULT: EMPTY".to_string());
        }
        steps.join(" -> ")
    }

    /// Check if any source succeeded.
    pub fn has_success(&self) -> bool {
        self.attempts.iter().any(|a| a.succeeded())
    }

    /// Get all errors.
    pub fn errors(&self) -> Vec<(&SourceId, &str)> {
        self.attempts
            .iter()
            .filter_map(|a| a.error.as_ref().map(|e| (&a.source_id, e.as_str())))
            .collect()
    }
}
