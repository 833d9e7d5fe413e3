//! HTTP handlers for analysis endpoints.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::{
    ExportReportHandler, ExportReportQuery, GetScorecardHandler, GetScorecardQuery,
    SubmitAnalysisCommand, SubmitAnalysisHandler, SubmitAnalysisResult,
};
use crate::domain::contract::{ContractSubmission, RiskFilter, ScorecardView};
use crate::ports::ExportFormat;

use super::dto::{
    AnalysisResponse, ReportParams, ScorecardParams, SubmitAnalysisRequest, UploadAnalysisRequest,
};
use crate::adapters::http::error::ApiError;

/// Shared state for analysis endpoints.
#[derive(Clone)]
pub struct AnalysisAppState {
    pub submit: Arc<SubmitAnalysisHandler>,
    pub scorecard: Arc<GetScorecardHandler>,
    pub export: Arc<ExportReportHandler>,
}

/// POST /api/analyses - Analyze pasted contract text
pub async fn submit_analysis(
    State(state): State<AnalysisAppState>,
    Json(req): Json<SubmitAnalysisRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SubmitAnalysisCommand {
        contract_name: req.contract_name,
        text: req.text,
        source_language: req.source_language,
    };
    let result = state.submit.handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(analysis_response(result))))
}

/// POST /api/analyses/upload - Analyze the contents of a text file
pub async fn upload_analysis(
    State(state): State<AnalysisAppState>,
    Json(req): Json<UploadAnalysisRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let submission =
        ContractSubmission::from_upload(&req.file_name, req.content, req.source_language)?;
    let result = state.submit.handle_submission(submission).await?;
    Ok((StatusCode::CREATED, Json(analysis_response(result))))
}

/// GET /api/analysis - Scorecard of the active analysis
pub async fn get_scorecard(
    State(state): State<AnalysisAppState>,
    Query(params): Query<ScorecardParams>,
) -> Result<Json<ScorecardView>, ApiError> {
    let filter = parse_filter(params.risk.as_deref())?;
    let view = state.scorecard.handle(GetScorecardQuery { filter }).await?;
    Ok(Json(view))
}

/// GET /api/analysis/report - Printable report of the active analysis
pub async fn export_report(
    State(state): State<AnalysisAppState>,
    Query(params): Query<ReportParams>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = parse_filter(params.risk.as_deref())?;
    let format = match params.format.as_deref().map(str::trim) {
        None | Some("") => ExportFormat::default(),
        Some(raw) => raw.parse::<ExportFormat>().map_err(ApiError::BadRequest)?,
    };
    let result = state
        .export
        .handle(ExportReportQuery { filter, format })
        .await?;
    Ok((
        [(header::CONTENT_TYPE, result.format.content_type())],
        result.content,
    ))
}

fn parse_filter(raw: Option<&str>) -> Result<RiskFilter, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(RiskFilter::All),
        Some(raw) => raw
            .parse::<RiskFilter>()
            .map_err(|e| ApiError::BadRequest(e.to_string())),
    }
}

fn analysis_response(result: SubmitAnalysisResult) -> AnalysisResponse {
    let active = &result.active;
    AnalysisResponse {
        ticket: result.ticket.sequence(),
        audit_entry_id: result.audit_entry.id().to_string(),
        scorecard: ScorecardView::build(
            &active.contract_name,
            active.analyzed_at,
            &active.analysis,
            RiskFilter::All,
        ),
    }
}
