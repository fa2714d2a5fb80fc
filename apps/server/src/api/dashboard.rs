use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tourism_core::{constants::DEFAULT_TOP_ACTIVITIES, Activity, DashboardSummary};

#[derive(Deserialize)]
struct DashboardQuery {
    top: Option<usize>,
}

async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Json<DashboardSummary> {
    let top = query.top.unwrap_or(DEFAULT_TOP_ACTIVITIES);
    Json(state.dashboard.summary(top))
}

#[derive(Deserialize)]
struct ActivitiesQuery {
    limit: Option<usize>,
    q: Option<String>,
}

async fn list_activities(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ActivitiesQuery>,
) -> Json<Vec<Activity>> {
    let mut activities = match query.q.as_deref() {
        Some(term) => state.dashboard.search(term),
        None => state.dashboard.all_activities(),
    };
    if let Some(limit) = query.limit {
        activities.truncate(limit);
    }
    Json(activities)
}

/// Reloads every dataset. A failure keeps the current data and answers 502.
async fn refresh(State(state): State<Arc<AppState>>) -> ApiResult<Json<DashboardSummary>> {
    if let Err(e) = state.dashboard.refresh().await {
        tracing::warn!("Refresh failed: {}", e);
        let message = state.dashboard.last_error().unwrap_or_else(|| e.to_string());
        return Err(ApiError::BadGateway(message));
    }
    Ok(Json(state.dashboard.summary(DEFAULT_TOP_ACTIVITIES)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/activities", get(list_activities))
        .route("/refresh", post(refresh))
}
