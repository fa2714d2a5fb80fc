use chrono::NaiveDate;
use log::info;

use super::export_model::{ExportBundle, ExportRequest, ExportScope};
use crate::constants::{DATE_FORMAT, EXPORT_FILE_PREFIX};
use crate::errors::{Result, ValidationError};
use crate::snapshot::Snapshot;

/// Selects the records a report covers and names its file.
///
/// A category scope exports that category's records; the full scope exports
/// the activity feed. Nothing is rendered.
pub fn prepare_export(
    snapshot: &Snapshot,
    request: &ExportRequest,
    today: NaiveDate,
) -> Result<ExportBundle> {
    let format = request.format.trim();
    if format.is_empty() {
        return Err(ValidationError::InvalidInput("export format is required".to_string()).into());
    }

    let records = match request.scope.category() {
        Some(category) => snapshot
            .records()
            .get(category)
            .iter()
            .map(|record| serde_json::to_value(record.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        None => snapshot
            .activities()
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?,
    };

    let file_name = file_name(request.scope, today);
    info!(
        "Prepared export '{}' ({} records, format {})",
        file_name,
        records.len(),
        format
    );

    Ok(ExportBundle {
        file_name,
        scope: request.scope,
        format: format.to_string(),
        record_count: records.len(),
        records,
        message: format!("تم تجهيز بيانات التقرير للتصدير بصيغة {}", format),
    })
}

fn file_name(scope: ExportScope, today: NaiveDate) -> String {
    let date = today.format(DATE_FORMAT);
    match scope.file_suffix() {
        Some(suffix) => format!("{}_{}_{}", EXPORT_FILE_PREFIX, suffix, date),
        None => format!("{}_{}", EXPORT_FILE_PREFIX, date),
    }
}
