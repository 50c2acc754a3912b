//! Framework catalog and assessment endpoints

use crate::{models::*, ApiState};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use grc_compliance::{ComplianceStatus, Framework, GapAnalysis};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(list_frameworks))
        .route("/:code/controls", get(list_controls))
        .route("/:code/assess", post(run_assessment))
}

/// Assessment request: control id → assessed status
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssessRequest {
    /// e.g. `{"A.5.1": "Compliant", "A.8.5": "NonCompliant"}`
    #[schema(value_type = Object)]
    pub control_states: HashMap<String, ComplianceStatus>,
}

/// List supported frameworks
#[utoipa::path(
    get,
    path = "/api/v1/frameworks",
    responses(
        (status = 200, description = "Supported compliance frameworks")
    ),
    tag = "frameworks"
)]
pub async fn list_frameworks(
    State(_state): State<Arc<ApiState>>,
) -> Json<ApiResponse<Vec<FrameworkDto>>> {
    let frameworks = Framework::ALL
        .iter()
        .map(|f| FrameworkDto {
            code: f.code().to_string(),
            name: f.to_string(),
            control_count: f.controls().len(),
        })
        .collect();
    Json(ApiResponse::success(frameworks))
}

/// List the control catalog for a framework
#[utoipa::path(
    get,
    path = "/api/v1/frameworks/{code}/controls",
    params(("code" = String, Path, description = "Framework code, e.g. ISO27001")),
    responses(
        (status = 200, description = "Control catalog"),
        (status = 400, description = "Unknown framework")
    ),
    tag = "frameworks"
)]
pub async fn list_controls(
    State(_state): State<Arc<ApiState>>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<Vec<ControlDto>>>, ApiError> {
    let framework = Framework::from_code(&code).map_err(ApiError::from)?;
    let controls = framework
        .controls()
        .into_iter()
        .map(|c| ControlDto {
            id: c.id,
            name: c.name,
            description: c.description,
            category: c.category,
            default_severity: c.default_severity,
        })
        .collect();
    Ok(Json(ApiResponse::success(controls)))
}

/// Run a gap analysis, opening a remediation item per gap
#[utoipa::path(
    post,
    path = "/api/v1/frameworks/{code}/assess",
    params(("code" = String, Path, description = "Framework code")),
    request_body = AssessRequest,
    responses(
        (status = 200, description = "Gap analysis result"),
        (status = 400, description = "Unknown framework")
    ),
    tag = "frameworks"
)]
pub async fn run_assessment(
    State(state): State<Arc<ApiState>>,
    Path(code): Path<String>,
    Json(input): Json<AssessRequest>,
) -> Result<Json<ApiResponse<GapAnalysis>>, ApiError> {
    let framework = Framework::from_code(&code).map_err(ApiError::from)?;
    let analysis = state
        .engine
        .run_assessment(framework, &input.control_states, "api");
    Ok(Json(ApiResponse::success(analysis)))
}
