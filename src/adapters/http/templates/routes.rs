//! HTTP routes for template endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_template, list_templates, TemplatesAppState};

/// Creates the template router with all routes.
pub fn template_routes(state: TemplatesAppState) -> Router {
    Router::new()
        .route("/api/templates", get(list_templates))
        .route("/api/templates/:id", get(get_template))
        .with_state(state)
}
