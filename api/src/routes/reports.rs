//! Report endpoints

use crate::{models::*, ApiState};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use grc_compliance::reporting::{ExecutiveSummary, RemediationReport, ReportGenerator};
use grc_compliance::Framework;
use std::sync::Arc;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/summary", get(executive_summary))
        .route("/:code", get(framework_report))
}

/// Executive summary across all frameworks
#[utoipa::path(
    get,
    path = "/api/v1/reports/summary",
    responses((status = 200, description = "Executive summary")),
    tag = "reports"
)]
pub async fn executive_summary(
    State(state): State<Arc<ApiState>>,
) -> Json<ApiResponse<ExecutiveSummary>> {
    let summary = ReportGenerator::executive_summary(&state.engine, Utc::now().date_naive());
    Json(ApiResponse::success(summary))
}

/// Remediation report for one framework
#[utoipa::path(
    get,
    path = "/api/v1/reports/{code}",
    params(("code" = String, Path, description = "Framework code")),
    responses(
        (status = 200, description = "Framework remediation report"),
        (status = 400, description = "Unknown framework")
    ),
    tag = "reports"
)]
pub async fn framework_report(
    State(state): State<Arc<ApiState>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<RemediationReport>>, ApiError> {
    let framework = Framework::from_code(&code).map_err(ApiError::from)?;
    let report =
        ReportGenerator::framework_report(&state.engine, framework, Utc::now().date_naive());
    Ok(Json(ApiResponse::success(report)))
}
