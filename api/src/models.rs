//! API Models

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, NaiveDate, Utc};
use grc_common::{GrcError, Money, ProgressPercent};
use grc_compliance::{
    AgingStatus, Framework, ItemDraft, ItemPatch, ItemView, PlanDraft, PlanSnapshot, PlanStatus,
    Priority, RemediationStatus, Severity,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Standard API response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorResponse {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// Paginated response
#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    /// Page `page` (1-based) of `items`, `per_page` at a time
    pub fn paginate(items: Vec<T>, page: u32, per_page: u32) -> Self {
        let per_page = per_page.max(1);
        let total = items.len() as u64;
        let total_pages = (total as u32).div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);
        let start = ((page - 1) * per_page) as usize;
        let items: Vec<T> = items
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .collect();
        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }
}

/// API error carrying an HTTP status and the uniform envelope
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "not_found",
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "invalid_input",
            message: message.into(),
        }
    }
}

impl From<GrcError> for ApiError {
    fn from(err: GrcError) -> Self {
        match err {
            GrcError::ItemNotFound(_) | GrcError::PlanNotFound(_) => {
                Self::not_found(err.to_string())
            }
            _ => Self::bad_request(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.code, &self.message);
        (self.status, Json(body)).into_response()
    }
}

// ============ Remediation Items ============

/// Remediation item as rendered, including derived aging fields
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub id: Uuid,
    pub reference: String,
    pub title: String,
    pub description: String,
    #[schema(value_type = String)]
    pub framework: Framework,
    pub control_id: String,
    pub control_name: String,
    #[schema(value_type = String)]
    pub severity: Severity,
    #[schema(value_type = String)]
    pub priority: Priority,
    #[schema(value_type = String)]
    pub status: RemediationStatus,
    pub progress: Option<u8>,
    pub effective_progress: u8,
    #[schema(value_type = String)]
    pub aging_status: AgingStatus,
    pub aging_days: i64,
    pub assigned_to: String,
    pub assigned_department: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub completion_date: Option<NaiveDate>,
    pub estimated_cost: u64,
    pub actual_cost: u64,
    pub notes: Vec<NoteDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ItemView> for ItemDto {
    fn from(view: ItemView) -> Self {
        let item = view.item;
        Self {
            id: item.id,
            reference: item.reference,
            title: item.title,
            description: item.description,
            framework: item.framework,
            control_id: item.control_id,
            control_name: item.control_name,
            severity: item.severity,
            priority: item.priority,
            status: item.status,
            progress: item.progress.map(|p| p.value()),
            effective_progress: view.effective_progress,
            aging_status: view.aging_status,
            aging_days: view.aging_days,
            assigned_to: item.assigned_to,
            assigned_department: item.assigned_department,
            start_date: item.start_date,
            due_date: item.due_date,
            completion_date: item.completion_date,
            estimated_cost: item.estimated_cost.value(),
            actual_cost: item.actual_cost.value(),
            notes: item
                .notes
                .into_iter()
                .map(|n| NoteDto {
                    text: n.text,
                    author: n.author,
                    created_at: n.created_at,
                })
                .collect(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Note on a remediation item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteDto {
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Remediation item creation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemCreateRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = String)]
    pub framework: Framework,
    #[serde(default)]
    pub control_id: String,
    #[serde(default)]
    pub control_name: String,
    #[schema(value_type = String)]
    pub severity: Severity,
    #[schema(value_type = String)]
    pub priority: Priority,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub status: Option<RemediationStatus>,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub assigned_department: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub estimated_cost: u64,
}

impl ItemCreateRequest {
    /// Validate and convert into an engine draft
    pub fn into_draft(self) -> Result<ItemDraft, ApiError> {
        let progress = self
            .progress
            .map(ProgressPercent::new)
            .transpose()
            .map_err(|e| ApiError::bad_request(e.to_string()))?;
        Ok(ItemDraft {
            title: self.title,
            description: self.description,
            framework: self.framework,
            control_id: self.control_id,
            control_name: self.control_name,
            severity: self.severity,
            priority: self.priority,
            status: self.status,
            progress,
            assigned_to: self.assigned_to,
            assigned_department: self.assigned_department,
            start_date: self.start_date,
            due_date: self.due_date,
            estimated_cost: Money::new(self.estimated_cost),
        })
    }
}

/// Partial remediation item update
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ItemUpdateRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub severity: Option<Severity>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub priority: Option<Priority>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub status: Option<RemediationStatus>,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub assigned_department: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub estimated_cost: Option<u64>,
    #[serde(default)]
    pub actual_cost: Option<u64>,
}

impl ItemUpdateRequest {
    /// Validate and convert into an engine patch
    pub fn into_patch(self) -> Result<ItemPatch, ApiError> {
        let progress = self
            .progress
            .map(ProgressPercent::new)
            .transpose()
            .map_err(|e| ApiError::bad_request(e.to_string()))?;
        Ok(ItemPatch {
            title: self.title,
            description: self.description,
            severity: self.severity,
            priority: self.priority,
            status: self.status,
            progress,
            assigned_to: self.assigned_to,
            assigned_department: self.assigned_department,
            start_date: self.start_date,
            due_date: self.due_date,
            estimated_cost: self.estimated_cost.map(Money::new),
            actual_cost: self.actual_cost.map(Money::new),
        })
    }
}

/// Note creation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteRequest {
    pub text: String,
    #[serde(default)]
    pub author: String,
}

// ============ Treatment Plans ============

/// Treatment plan with derived rollups
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanDto {
    pub id: Uuid,
    pub reference: String,
    pub title: String,
    pub description: String,
    #[schema(value_type = String)]
    pub framework: Framework,
    pub owner: String,
    #[schema(value_type = String)]
    pub status: PlanStatus,
    pub target_completion_date: NaiveDate,
    pub approved_by: Option<String>,
    pub item_ids: Vec<Uuid>,
    pub total_controls: usize,
    pub completed_controls: usize,
    pub progress_pct: f64,
    pub days_overdue: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PlanSnapshot> for PlanDto {
    fn from(snap: PlanSnapshot) -> Self {
        let plan = snap.plan;
        Self {
            id: plan.id,
            reference: plan.reference,
            title: plan.title,
            description: plan.description,
            framework: plan.framework,
            owner: plan.owner,
            status: plan.status,
            target_completion_date: plan.target_completion_date,
            approved_by: plan.approved_by,
            item_ids: plan.item_ids,
            total_controls: snap.total_controls,
            completed_controls: snap.completed_controls,
            progress_pct: snap.progress_pct,
            days_overdue: snap.days_overdue,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}

/// Treatment plan creation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanCreateRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = String)]
    pub framework: Framework,
    #[serde(default)]
    pub owner: String,
    pub target_completion_date: NaiveDate,
    #[serde(default)]
    pub item_ids: Vec<Uuid>,
}

impl From<PlanCreateRequest> for PlanDraft {
    fn from(req: PlanCreateRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            framework: req.framework,
            owner: req.owner,
            target_completion_date: req.target_completion_date,
            item_ids: req.item_ids,
        }
    }
}

/// Treatment plan status change
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanStatusRequest {
    #[schema(value_type = String)]
    pub status: PlanStatus,
    #[serde(default)]
    pub approved_by: Option<String>,
}

// ============ Frameworks ============

/// Framework listing entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FrameworkDto {
    pub code: String,
    pub name: String,
    pub control_count: usize,
}

/// Catalog control
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ControlDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[schema(value_type = String)]
    pub default_severity: Severity,
}
