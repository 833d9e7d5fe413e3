//! JSON error body and status mapping shared by every endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::contract::AnalysisError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::session::SessionError;

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound { resource: &'static str, id: String },
    Analysis(AnalysisError),
    Session(SessionError),
    Domain(DomainError),
}

impl ApiError {
    fn status_and_body(self) -> (StatusCode, ErrorResponse) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg)),
            ApiError::NotFound { resource, id } => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(resource, &id))
            }
            ApiError::Analysis(err) => {
                let status = match &err {
                    AnalysisError::InputIncomplete => StatusCode::BAD_REQUEST,
                    AnalysisError::SourceUnreadable { .. } => {
                        return (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(err.to_string()))
                    }
                    AnalysisError::TranslationFailed { .. } | AnalysisError::AnalysisFailed { .. } => {
                        StatusCode::BAD_GATEWAY
                    }
                    AnalysisError::Superseded => StatusCode::CONFLICT,
                };
                (status, ErrorResponse::new(err.code(), err.to_string()))
            }
            ApiError::Session(err) => match err {
                SessionError::NoActiveAnalysis => (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("NOT_FOUND", err.message()),
                ),
                SessionError::Superseded { .. } => (
                    StatusCode::CONFLICT,
                    ErrorResponse::new(err.code(), err.message()),
                ),
            },
            ApiError::Domain(err) => match err.code {
                ErrorCode::TemplateNotFound | ErrorCode::AnalysisNotFound => {
                    let details = serde_json::to_value(&err.details).ok();
                    (
                        StatusCode::NOT_FOUND,
                        ErrorResponse {
                            details,
                            ..ErrorResponse::new("NOT_FOUND", err.message)
                        },
                    )
                }
                ErrorCode::ValidationFailed | ErrorCode::InputIncomplete => {
                    (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(err.message))
                }
                _ => {
                    tracing::error!(code = %err.code, message = %err.message, "request failed");
                    (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(err.message))
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        ApiError::Analysis(err)
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        ApiError::Session(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}
