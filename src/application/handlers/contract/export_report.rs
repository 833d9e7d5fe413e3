//! ExportReportHandler - renders the active scorecard for printing.

use std::sync::Arc;

use crate::domain::audit::{AuditEntry, ACTION_REPORT_EXPORTED};
use crate::domain::contract::{RiskFilter, ScorecardView};
use crate::domain::session::SessionError;
use crate::ports::{ExportFormat, ReportRenderer, SessionStore};

#[derive(Debug, Clone, Default)]
pub struct ExportReportQuery {
    pub filter: RiskFilter,
    pub format: ExportFormat,
}

#[derive(Debug, Clone)]
pub struct ExportReportResult {
    pub contract_name: String,
    pub format: ExportFormat,
    pub content: String,
}

/// Each successful export is recorded in the audit trail.
pub struct ExportReportHandler {
    store: Arc<dyn SessionStore>,
    renderer: Arc<dyn ReportRenderer>,
}

impl ExportReportHandler {
    pub fn new(store: Arc<dyn SessionStore>, renderer: Arc<dyn ReportRenderer>) -> Self {
        Self { store, renderer }
    }

    pub async fn handle(&self, query: ExportReportQuery) -> Result<ExportReportResult, SessionError> {
        let active = self
            .store
            .active_analysis()
            .await
            .ok_or(SessionError::NoActiveAnalysis)?;
        let view = ScorecardView::build(
            &active.contract_name,
            active.analyzed_at,
            &active.analysis,
            query.filter,
        );
        let content = self.renderer.render(&view, query.format);

        self.store
            .append_audit_entry(AuditEntry::record(&active.contract_name, ACTION_REPORT_EXPORTED))
            .await;
        tracing::info!(contract = %active.contract_name, format = %query.format, "report exported");

        Ok(ExportReportResult {
            contract_name: active.contract_name,
            format: query.format,
            content,
        })
    }
}
