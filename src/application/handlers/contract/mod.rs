//! Contract analysis handlers.

mod export_report;
mod get_scorecard;
mod submit_analysis;

pub use export_report::{ExportReportHandler, ExportReportQuery, ExportReportResult};
pub use get_scorecard::{GetScorecardHandler, GetScorecardQuery, GetScorecardResult};
pub use submit_analysis::{SubmitAnalysisCommand, SubmitAnalysisHandler, SubmitAnalysisResult};
