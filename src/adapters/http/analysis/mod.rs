//! HTTP adapter for contract analysis endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalysisResponse, ReportParams, ScorecardParams, SubmitAnalysisRequest, UploadAnalysisRequest,
};
pub use handlers::AnalysisAppState;
pub use routes::analysis_routes;
