//! Activities module - the unified feed and the pipeline that builds it.

mod activities_model;
mod pipeline;

#[cfg(test)]
mod pipeline_tests;

pub use activities_model::{Activity, ActivityRow};
pub use pipeline::{build_activities, parse_record_date, project};
