//! Analytics endpoints

use crate::{models::*, ApiState};
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use grc_compliance::stats::{
    aging_analysis, monthly_trend, workload_by_assignee, AgingBucketCount, AssigneeWorkload,
    MonthlyTrendPoint,
};
use grc_compliance::{Framework, RemediationItem};
use std::sync::Arc;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/aging", get(get_aging))
        .route("/workload", get(get_workload))
        .route("/trend", get(get_trend))
}

#[derive(Debug, serde::Deserialize)]
pub struct AnalyticsParams {
    framework: Option<String>,
}

fn scoped_items(
    state: &ApiState,
    framework: &Option<String>,
) -> Result<Vec<RemediationItem>, ApiError> {
    match framework {
        Some(code) => {
            let framework = Framework::from_code(code).map_err(ApiError::from)?;
            Ok(state.engine.tracker.by_framework(framework))
        }
        None => Ok(state.engine.tracker.all()),
    }
}

/// Item counts per age bucket
#[utoipa::path(
    get,
    path = "/api/v1/analytics/aging",
    params(("framework" = Option<String>, Query, description = "Restrict to one framework")),
    responses((status = 200, description = "Aging analysis buckets")),
    tag = "analytics"
)]
pub async fn get_aging(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<AnalyticsParams>,
) -> Result<Json<ApiResponse<Vec<AgingBucketCount>>>, ApiError> {
    let items = scoped_items(&state, &params.framework)?;
    Ok(Json(ApiResponse::success(aging_analysis(
        &items,
        Utc::now().date_naive(),
    ))))
}

/// Open/in-progress/resolved counts per assignee
#[utoipa::path(
    get,
    path = "/api/v1/analytics/workload",
    params(("framework" = Option<String>, Query, description = "Restrict to one framework")),
    responses((status = 200, description = "Assignee workload")),
    tag = "analytics"
)]
pub async fn get_workload(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<AnalyticsParams>,
) -> Result<Json<ApiResponse<Vec<AssigneeWorkload>>>, ApiError> {
    let items = scoped_items(&state, &params.framework)?;
    Ok(Json(ApiResponse::success(workload_by_assignee(&items))))
}

/// Created/completed trend over the last six months
#[utoipa::path(
    get,
    path = "/api/v1/analytics/trend",
    params(("framework" = Option<String>, Query, description = "Restrict to one framework")),
    responses((status = 200, description = "Monthly trend")),
    tag = "analytics"
)]
pub async fn get_trend(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<AnalyticsParams>,
) -> Result<Json<ApiResponse<Vec<MonthlyTrendPoint>>>, ApiError> {
    let items = scoped_items(&state, &params.framework)?;
    Ok(Json(ApiResponse::success(monthly_trend(
        &items,
        Utc::now().date_naive(),
    ))))
}
