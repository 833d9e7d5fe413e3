//! HTTP handlers for dashboard endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::{Json, State};

use crate::application::handlers::{GetDashboardOverviewHandler, GetDashboardOverviewQuery};
use crate::domain::dashboard::DashboardOverview;

/// Shared application state containing dashboard dependencies.
#[derive(Clone)]
pub struct DashboardAppState {
    pub overview: Arc<GetDashboardOverviewHandler>,
}

/// GET /api/dashboard - Dashboard overview for the current session
pub async fn get_dashboard_overview(
    State(state): State<DashboardAppState>,
) -> Json<DashboardOverview> {
    Json(state.overview.handle(GetDashboardOverviewQuery).await)
}
