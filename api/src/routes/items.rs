//! Remediation item endpoints

use crate::{models::*, ApiState};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use grc_compliance::{Framework, ItemView};
use std::sync::Arc;
use uuid::Uuid;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/stats", get(item_stats))
        .route(
            "/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/:id/cancel", post(cancel_item))
        .route("/:id/notes", post(add_note))
}

#[derive(Debug, serde::Deserialize)]
pub struct ListParams {
    page: Option<u32>,
    per_page: Option<u32>,
    status: Option<String>,
    severity: Option<String>,
    priority: Option<String>,
    framework: Option<String>,
    q: Option<String>,
}

impl ListParams {
    fn matches(&self, view: &ItemView) -> bool {
        let item = &view.item;
        if let Some(status) = &self.status {
            if !format!("{:?}", item.status).eq_ignore_ascii_case(status) {
                return false;
            }
        }
        if let Some(severity) = &self.severity {
            if !format!("{:?}", item.severity).eq_ignore_ascii_case(severity) {
                return false;
            }
        }
        if let Some(priority) = &self.priority {
            if !format!("{:?}", item.priority).eq_ignore_ascii_case(priority) {
                return false;
            }
        }
        if let Some(framework) = &self.framework {
            if !item.framework.code().eq_ignore_ascii_case(framework) {
                return false;
            }
        }
        if let Some(q) = &self.q {
            let q = q.to_lowercase();
            let haystack = [
                &item.title,
                &item.reference,
                &item.control_id,
                &item.control_name,
                &item.assigned_to,
                &item.assigned_department,
            ];
            if !haystack.iter().any(|f| f.to_lowercase().contains(&q)) {
                return false;
            }
        }
        true
    }
}

/// List remediation items
#[utoipa::path(
    get,
    path = "/api/v1/items",
    params(
        ("page" = Option<u32>, Query, description = "Page number"),
        ("per_page" = Option<u32>, Query, description = "Items per page"),
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("severity" = Option<String>, Query, description = "Filter by severity"),
        ("priority" = Option<String>, Query, description = "Filter by priority"),
        ("framework" = Option<String>, Query, description = "Filter by framework code"),
        ("q" = Option<String>, Query, description = "Search title, reference, control, assignee")
    ),
    responses(
        (status = 200, description = "Paginated remediation items")
    ),
    tag = "items"
)]
pub async fn list_items(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<ListParams>,
) -> Json<ApiResponse<PaginatedResponse<ItemDto>>> {
    let page = params.page.unwrap_or(1);
    let per_page = params.per_page.unwrap_or(20);

    let items: Vec<ItemDto> = state
        .engine
        .item_views()
        .into_iter()
        .filter(|v| params.matches(v))
        .map(ItemDto::from)
        .collect();

    Json(ApiResponse::success(PaginatedResponse::paginate(
        items, page, per_page,
    )))
}

/// Get a remediation item
#[utoipa::path(
    get,
    path = "/api/v1/items/{id}",
    params(("id" = Uuid, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item with derived aging", body = ItemDto),
        (status = 404, description = "Item not found")
    ),
    tag = "items"
)]
pub async fn get_item(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ItemDto>>, ApiError> {
    let view = state
        .engine
        .item_view(id)
        .ok_or_else(|| ApiError::not_found(format!("item not found: {id}")))?;
    Ok(Json(ApiResponse::success(view.into())))
}

/// Create a remediation item
#[utoipa::path(
    post,
    path = "/api/v1/items",
    request_body = ItemCreateRequest,
    responses(
        (status = 201, description = "Item created", body = ItemDto),
        (status = 400, description = "Invalid input")
    ),
    tag = "items"
)]
pub async fn create_item(
    State(state): State<Arc<ApiState>>,
    Json(input): Json<ItemCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ItemDto>>), ApiError> {
    if input.title.trim().is_empty() {
        return Err(ApiError::bad_request("title is required"));
    }
    let draft = input.into_draft()?;
    let item = state.engine.create_item(draft, "api");
    let view = state
        .engine
        .item_view(item.id)
        .ok_or_else(|| ApiError::not_found(format!("item not found: {}", item.id)))?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(view.into())),
    ))
}

/// Update a remediation item with partial fields
#[utoipa::path(
    put,
    path = "/api/v1/items/{id}",
    params(("id" = Uuid, Path, description = "Item ID")),
    request_body = ItemUpdateRequest,
    responses(
        (status = 200, description = "Updated item", body = ItemDto),
        (status = 404, description = "Item not found")
    ),
    tag = "items"
)]
pub async fn update_item(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(input): Json<ItemUpdateRequest>,
) -> Result<Json<ApiResponse<ItemDto>>, ApiError> {
    let patch = input.into_patch()?;
    state.engine.update_item(id, patch, "api")?;
    let view = state
        .engine
        .item_view(id)
        .ok_or_else(|| ApiError::not_found(format!("item not found: {id}")))?;
    Ok(Json(ApiResponse::success(view.into())))
}

/// Soft-cancel a remediation item
pub async fn cancel_item(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ItemDto>>, ApiError> {
    state.engine.cancel_item(id, "api")?;
    let view = state
        .engine
        .item_view(id)
        .ok_or_else(|| ApiError::not_found(format!("item not found: {id}")))?;
    Ok(Json(ApiResponse::success(view.into())))
}

/// Delete a remediation item
#[utoipa::path(
    delete,
    path = "/api/v1/items/{id}",
    params(("id" = Uuid, Path, description = "Item ID")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found")
    ),
    tag = "items"
)]
pub async fn delete_item(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.engine.delete_item(id, "api")?;
    Ok(StatusCode::NO_CONTENT)
}

/// Append a note to an item
pub async fn add_note(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(input): Json<NoteRequest>,
) -> Result<Json<ApiResponse<ItemDto>>, ApiError> {
    let author = if input.author.is_empty() {
        "api".to_string()
    } else {
        input.author
    };
    state.engine.add_note(id, &input.text, &author)?;
    let view = state
        .engine
        .item_view(id)
        .ok_or_else(|| ApiError::not_found(format!("item not found: {id}")))?;
    Ok(Json(ApiResponse::success(view.into())))
}

/// Aggregate statistics over items
#[utoipa::path(
    get,
    path = "/api/v1/items/stats",
    params(
        ("framework" = Option<String>, Query, description = "Restrict to one framework")
    ),
    responses(
        (status = 200, description = "Aggregate remediation statistics")
    ),
    tag = "items"
)]
pub async fn item_stats(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<StatsParams>,
) -> Result<Json<ApiResponse<grc_compliance::RemediationStats>>, ApiError> {
    let stats = match params.framework {
        Some(code) => {
            let framework = Framework::from_code(&code).map_err(ApiError::from)?;
            state.engine.framework_stats(framework)
        }
        None => state.engine.stats(),
    };
    Ok(Json(ApiResponse::success(stats)))
}

#[derive(Debug, serde::Deserialize)]
pub struct StatsParams {
    framework: Option<String>,
}
