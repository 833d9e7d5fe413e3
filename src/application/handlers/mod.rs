//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod audit;
pub mod contract;
pub mod dashboard;
pub mod templates;

pub use audit::{GetAuditTrailHandler, GetAuditTrailQuery};
pub use contract::{
    ExportReportHandler, ExportReportQuery, ExportReportResult, GetScorecardHandler,
    GetScorecardQuery, GetScorecardResult, SubmitAnalysisCommand, SubmitAnalysisHandler,
    SubmitAnalysisResult,
};
pub use dashboard::{
    GetDashboardOverviewHandler, GetDashboardOverviewQuery, GetDashboardOverviewResult,
};
pub use templates::{
    GetTemplateHandler, GetTemplateQuery, ListTemplatesHandler, ListTemplatesQuery,
    ListTemplatesResult,
};
