//! HTTP handlers for audit endpoints.

use std::sync::Arc;

use axum::extract::{Json, Query, State};

use crate::application::handlers::{GetAuditTrailHandler, GetAuditTrailQuery};

use super::dto::{AuditTrailParams, AuditTrailResponse};

#[derive(Clone)]
pub struct AuditAppState {
    pub trail: Arc<GetAuditTrailHandler>,
}

/// GET /api/audit - Session audit trail
pub async fn get_audit_trail(
    State(state): State<AuditAppState>,
    Query(params): Query<AuditTrailParams>,
) -> Json<AuditTrailResponse> {
    let trail = state
        .trail
        .handle(GetAuditTrailQuery {
            limit: params.limit,
        })
        .await;
    Json(AuditTrailResponse::from(&trail))
}
