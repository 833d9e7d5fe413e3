//! Top-level router: feature routes, health check, tracing and CORS.

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::Services;

use super::analysis::{analysis_routes, AnalysisAppState};
use super::audit::{audit_routes, AuditAppState};
use super::dashboard::{dashboard_routes, DashboardAppState};
use super::templates::{template_routes, TemplatesAppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Builds the full API. With no configured origins CORS is permissive.
pub fn app_router(services: &Services, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(analysis_routes(AnalysisAppState {
            submit: services.submit_analysis.clone(),
            scorecard: services.get_scorecard.clone(),
            export: services.export_report.clone(),
        }))
        .merge(template_routes(TemplatesAppState {
            list: services.list_templates.clone(),
            get: services.get_template.clone(),
        }))
        .merge(audit_routes(AuditAppState {
            trail: services.get_audit_trail.clone(),
        }))
        .merge(dashboard_routes(DashboardAppState {
            overview: services.get_dashboard.clone(),
        }))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
