//! Snapshot module - the assembled dataset the dashboard reads from.

mod snapshot_model;

#[cfg(test)]
mod snapshot_model_tests;

pub use snapshot_model::{CategorySequences, CategoryStat, Snapshot};
