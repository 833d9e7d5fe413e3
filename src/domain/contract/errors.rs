//! Failures of the submission pipeline.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// User-displayable failure of a contract submission.
///
/// Every variant leaves the previously active analysis untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Name or body text missing; detected before any external call.
    #[error("Please provide both a contract name and some text content.")]
    InputIncomplete,

    /// The uploaded file could not be read as text.
    #[error("Could not read the contract file: {message}")]
    SourceUnreadable { message: String },

    /// Hindi-to-English preprocessing failed; analysis was not attempted.
    #[error("Failed to translate the contract: {message}")]
    TranslationFailed { message: String },

    /// The generation service failed or replied with content that does not fit the schema.
    #[error("Failed to analyze the contract: {message}")]
    AnalysisFailed { message: String },

    /// A newer submission started while this one was in flight; its result was discarded.
    #[error("A newer analysis was started; this result was discarded.")]
    Superseded,
}

impl AnalysisError {
    pub fn source_unreadable(message: impl Into<String>) -> Self {
        AnalysisError::SourceUnreadable {
            message: message.into(),
        }
    }

    pub fn translation_failed(message: impl Into<String>) -> Self {
        AnalysisError::TranslationFailed {
            message: message.into(),
        }
    }

    pub fn analysis_failed(message: impl Into<String>) -> Self {
        AnalysisError::AnalysisFailed {
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::InputIncomplete => ErrorCode::InputIncomplete,
            AnalysisError::SourceUnreadable { .. } => ErrorCode::ValidationFailed,
            AnalysisError::TranslationFailed { .. } => ErrorCode::TranslationFailed,
            AnalysisError::AnalysisFailed { .. } => ErrorCode::AnalysisFailed,
            AnalysisError::Superseded => ErrorCode::Superseded,
        }
    }
}
