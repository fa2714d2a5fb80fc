//! Export module - selects report data and names the report file.

mod export_model;
mod export_service;

pub use export_model::{ExportBundle, ExportRequest, ExportScope};
pub use export_service::prepare_export;
