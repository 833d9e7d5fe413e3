//! Session-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};

use super::AnalysisTicket;

/// Session state transition errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A newer analysis was started after this ticket was issued.
    Superseded {
        ticket: AnalysisTicket,
        latest: AnalysisTicket,
    },
    /// No analysis has completed yet.
    NoActiveAnalysis,
}

impl SessionError {
    pub fn superseded(ticket: AnalysisTicket, latest: AnalysisTicket) -> Self {
        SessionError::Superseded { ticket, latest }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Superseded { .. } => ErrorCode::Superseded,
            SessionError::NoActiveAnalysis => ErrorCode::AnalysisNotFound,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SessionError::Superseded { ticket, latest } => format!(
                "Analysis {} was superseded by analysis {}",
                ticket.sequence(),
                latest.sequence()
            ),
            SessionError::NoActiveAnalysis => {
                "No active analysis. Submit a contract first.".to_string()
            }
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
