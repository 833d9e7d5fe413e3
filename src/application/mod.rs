//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change the session; query handlers only read it.

pub mod handlers;

pub use handlers::{
    ExportReportHandler, ExportReportQuery, GetAuditTrailHandler, GetAuditTrailQuery,
    GetDashboardOverviewHandler, GetDashboardOverviewQuery, GetScorecardHandler,
    GetScorecardQuery, GetTemplateHandler, GetTemplateQuery, ListTemplatesHandler,
    ListTemplatesQuery, SubmitAnalysisCommand, SubmitAnalysisHandler,
};
