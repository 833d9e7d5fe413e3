//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own HTTP adapter for endpoint exposure; `app`
//! merges them into one router.

pub mod analysis;
pub mod app;
pub mod audit;
pub mod dashboard;
pub mod error;
pub mod templates;

// Re-export key types for convenience
pub use analysis::{analysis_routes, AnalysisAppState};
pub use app::app_router;
pub use audit::{audit_routes, AuditAppState};
pub use dashboard::{dashboard_routes, DashboardAppState};
pub use error::{ApiError, ErrorResponse};
pub use templates::{template_routes, TemplatesAppState};
