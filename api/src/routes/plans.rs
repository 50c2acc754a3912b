//! Treatment plan endpoints

use crate::{models::*, ApiState};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(list_plans).post(create_plan))
        .route("/:id", get(get_plan).delete(delete_plan))
        .route("/:id/status", post(set_plan_status))
        .route("/:id/items/:item_id", post(attach_item))
}

/// List treatment plans with rollups
#[utoipa::path(
    get,
    path = "/api/v1/plans",
    responses(
        (status = 200, description = "Treatment plans with derived rollups")
    ),
    tag = "plans"
)]
pub async fn list_plans(
    State(state): State<Arc<ApiState>>,
) -> Json<ApiResponse<Vec<PlanDto>>> {
    let items = state.engine.tracker.all();
    let today = Utc::now().date_naive();
    let plans: Vec<PlanDto> = state
        .engine
        .plans
        .snapshots(&items, today)
        .into_iter()
        .map(PlanDto::from)
        .collect();
    Json(ApiResponse::success(plans))
}

/// Get a treatment plan
#[utoipa::path(
    get,
    path = "/api/v1/plans/{id}",
    params(("id" = Uuid, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Plan with derived rollups", body = PlanDto),
        (status = 404, description = "Plan not found")
    ),
    tag = "plans"
)]
pub async fn get_plan(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PlanDto>>, ApiError> {
    let items = state.engine.tracker.all();
    let snap = state
        .engine
        .plans
        .snapshot(id, &items, Utc::now().date_naive())?;
    Ok(Json(ApiResponse::success(snap.into())))
}

/// Create a treatment plan
#[utoipa::path(
    post,
    path = "/api/v1/plans",
    request_body = PlanCreateRequest,
    responses(
        (status = 201, description = "Plan created", body = PlanDto),
        (status = 400, description = "Invalid input")
    ),
    tag = "plans"
)]
pub async fn create_plan(
    State(state): State<Arc<ApiState>>,
    Json(input): Json<PlanCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PlanDto>>), ApiError> {
    if input.title.trim().is_empty() {
        return Err(ApiError::bad_request("title is required"));
    }
    let plan = state.engine.create_plan(input.into(), "api");
    let items = state.engine.tracker.all();
    let snap = state
        .engine
        .plans
        .snapshot(plan.id, &items, Utc::now().date_naive())?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(snap.into()))))
}

/// Change a plan's lifecycle status
pub async fn set_plan_status(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(input): Json<PlanStatusRequest>,
) -> Result<Json<ApiResponse<PlanDto>>, ApiError> {
    state
        .engine
        .plans
        .set_status(id, input.status, input.approved_by)?;
    let items = state.engine.tracker.all();
    let snap = state
        .engine
        .plans
        .snapshot(id, &items, Utc::now().date_naive())?;
    Ok(Json(ApiResponse::success(snap.into())))
}

/// Attach an item to a plan
pub async fn attach_item(
    State(state): State<Arc<ApiState>>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<PlanDto>>, ApiError> {
    if state.engine.tracker.get(item_id).is_none() {
        return Err(ApiError::not_found(format!("item not found: {item_id}")));
    }
    state.engine.plans.add_item(id, item_id)?;
    let items = state.engine.tracker.all();
    let snap = state
        .engine
        .plans
        .snapshot(id, &items, Utc::now().date_naive())?;
    Ok(Json(ApiResponse::success(snap.into())))
}

/// Delete a treatment plan
#[utoipa::path(
    delete,
    path = "/api/v1/plans/{id}",
    params(("id" = Uuid, Path, description = "Plan ID")),
    responses(
        (status = 204, description = "Plan deleted"),
        (status = 404, description = "Plan not found")
    ),
    tag = "plans"
)]
pub async fn delete_plan(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.engine.delete_plan(id, "api")?;
    Ok(StatusCode::NO_CONTENT)
}
