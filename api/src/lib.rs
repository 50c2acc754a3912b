//! OpenGRC Compliance Platform API
//!
//! REST API over the compliance engine: remediation item CRUD, treatment
//! plans, framework assessments, analytics, reports, and the audit trail.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        COMPLIANCE API (OGA)                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                         REST API                                 │   │
//! │  │    OpenAPI 3 | Uniform Envelope | Pagination | CORS | Trace     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌─────────────┐ │
//! │  │    Items     │  │    Plans     │  │  Frameworks  │  │  Analytics  │ │
//! │  │    (CRUD)    │  │  (Rollups)   │  │   (Assess)   │  │  /Reports   │ │
//! │  └──────┬───────┘  └──────┬───────┘  └──────┬───────┘  └──────┬──────┘ │
//! │         │                 │                 │                 │        │
//! │  ┌──────▼─────────────────▼─────────────────▼─────────────────▼──────┐ │
//! │  │                     COMPLIANCE ENGINE                             │ │
//! │  └───────────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![allow(dead_code)]

pub mod models;
pub mod routes;

use axum::{routing::get, Router};
use grc_compliance::ComplianceEngine;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use models::*;

/// API state
pub struct ApiState {
    /// Shared compliance engine
    pub engine: ComplianceEngine,
}

impl ApiState {
    /// Fresh state with an empty engine
    pub fn new() -> Self {
        Self {
            engine: ComplianceEngine::new(),
        }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "OpenGRC API",
        version = "1.0.0",
        description = "OpenGRC Compliance Platform API - remediation tracking across ISO 27001, NESA UAE, HIPAA, MiCA and NIS2",
        license(name = "Apache-2.0")
    ),
    paths(
        routes::health::health_check,
        routes::items::list_items,
        routes::items::get_item,
        routes::items::create_item,
        routes::items::update_item,
        routes::items::delete_item,
        routes::items::item_stats,
        routes::plans::list_plans,
        routes::plans::get_plan,
        routes::plans::create_plan,
        routes::plans::delete_plan,
        routes::frameworks::list_frameworks,
        routes::frameworks::list_controls,
        routes::frameworks::run_assessment,
        routes::analytics::get_aging,
        routes::analytics::get_workload,
        routes::analytics::get_trend,
        routes::reports::executive_summary,
        routes::reports::framework_report,
        routes::audit::list_events,
        routes::audit::verify_integrity,
    ),
    components(
        schemas(
            ErrorResponse,
            ItemDto, NoteDto, ItemCreateRequest, ItemUpdateRequest, NoteRequest,
            PlanDto, PlanCreateRequest, PlanStatusRequest,
            FrameworkDto, ControlDto,
            routes::frameworks::AssessRequest,
            routes::health::HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "items", description = "Remediation item management"),
        (name = "plans", description = "Treatment plan management"),
        (name = "frameworks", description = "Framework catalogs and assessments"),
        (name = "analytics", description = "Aging, workload and trend analytics"),
        (name = "reports", description = "Executive and framework reports"),
        (name = "audit", description = "Tamper-evident audit trail")
    )
)]
pub struct ApiDoc;

/// Build the API router
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health::health_check))
        .nest("/api/v1", api_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

fn api_routes() -> Router<Arc<ApiState>> {
    Router::new()
        .nest("/items", routes::items::router())
        .nest("/plans", routes::plans::router())
        .nest("/frameworks", routes::frameworks::router())
        .nest("/analytics", routes::analytics::router())
        .nest("/reports", routes::reports::router())
        .nest("/audit", routes::audit::router())
}
