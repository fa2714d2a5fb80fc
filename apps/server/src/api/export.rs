use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use tourism_core::{ExportBundle, ExportRequest};

async fn export_report(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExportRequest>,
) -> ApiResult<Json<ExportBundle>> {
    let bundle = state
        .dashboard
        .export(&request, Utc::now().date_naive())?;
    Ok(Json(bundle))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/export", post(export_report))
}
