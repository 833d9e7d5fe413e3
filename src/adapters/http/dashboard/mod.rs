//! HTTP adapter for dashboard endpoints.

mod handlers;
mod routes;

pub use handlers::DashboardAppState;
pub use routes::dashboard_routes;
