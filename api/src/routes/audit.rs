//! Audit trail endpoints

use crate::{models::*, ApiState};
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use grc_compliance::audit::{AuditFilter, IntegrityResult};
use grc_compliance::AuditEvent;
use std::sync::Arc;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(list_events))
        .route("/verify", get(verify_integrity))
}

#[derive(Debug, serde::Deserialize)]
pub struct AuditParams {
    actor: Option<String>,
}

/// List audit events
#[utoipa::path(
    get,
    path = "/api/v1/audit",
    params(("actor" = Option<String>, Query, description = "Filter by actor substring")),
    responses((status = 200, description = "Audit events")),
    tag = "audit"
)]
pub async fn list_events(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<AuditParams>,
) -> Json<ApiResponse<Vec<AuditEvent>>> {
    let filter = params.actor.map(|actor| AuditFilter {
        actor: Some(actor),
        ..Default::default()
    });
    Json(ApiResponse::success(state.engine.audit.get_events(filter)))
}

/// Verify hash-chain integrity
#[utoipa::path(
    get,
    path = "/api/v1/audit/verify",
    responses((status = 200, description = "Integrity check result")),
    tag = "audit"
)]
pub async fn verify_integrity(
    State(state): State<Arc<ApiState>>,
) -> Json<ApiResponse<IntegrityResult>> {
    Json(ApiResponse::success(state.engine.audit.verify_integrity()))
}
