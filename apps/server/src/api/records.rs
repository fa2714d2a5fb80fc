use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use tourism_core::{Category, CategoryRecord};
use tourism_source_data::RawRecord;

async fn list_records(
    Path(category): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Arc<CategoryRecord>>>> {
    let category: Category = category.parse()?;
    Ok(Json(state.dashboard.records(category)))
}

/// Adds a record to the front of its category. Records without a date are
/// stamped with today's date.
async fn create_record(
    Path(category): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(raw): Json<RawRecord>,
) -> ApiResult<(StatusCode, Json<CategoryRecord>)> {
    let category: Category = category.parse()?;
    let mut record = CategoryRecord::from_raw(category, raw)?;
    record.stamp_date_if_missing(Utc::now().date_naive());
    state.dashboard.add_record(record.clone());
    Ok((StatusCode::CREATED, Json(record)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/records/{category}", get(list_records).post(create_record))
}
