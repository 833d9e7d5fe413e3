//! HTTP routes for analysis endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    export_report, get_scorecard, submit_analysis, upload_analysis, AnalysisAppState,
};

/// Creates the analysis router with all routes.
pub fn analysis_routes(state: AnalysisAppState) -> Router {
    Router::new()
        .route("/api/analyses", post(submit_analysis))
        .route("/api/analyses/upload", post(upload_analysis))
        .route("/api/analysis", get(get_scorecard))
        .route("/api/analysis/report", get(export_report))
        .with_state(state)
}
