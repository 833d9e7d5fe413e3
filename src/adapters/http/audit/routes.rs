//! HTTP routes for audit endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_audit_trail, AuditAppState};

pub fn audit_routes(state: AuditAppState) -> Router {
    Router::new()
        .route("/api/audit", get(get_audit_trail))
        .with_state(state)
}
