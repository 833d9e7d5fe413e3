//! HTTP DTOs for analysis endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::contract::{ScorecardView, SourceLanguage};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Pasted contract text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnalysisRequest {
    pub contract_name: String,
    pub text: String,
    #[serde(default)]
    pub source_language: SourceLanguage,
}

/// A text file read by the client; the contract name comes from the file name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadAnalysisRequest {
    pub file_name: String,
    pub content: String,
    #[serde(default)]
    pub source_language: SourceLanguage,
}

/// `?risk=All|Low|Medium|High`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScorecardParams {
    pub risk: Option<String>,
}

/// `?format=html|markdown&risk=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportParams {
    pub format: Option<String>,
    pub risk: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A committed analysis, shown unfiltered.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub ticket: u64,
    pub audit_entry_id: String,
    pub scorecard: ScorecardView,
}
