//! HTTP DTOs for audit endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::audit::{AuditEntry, AuditTrail};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditTrailParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntryResponse {
    pub id: String,
    pub timestamp: String,
    pub recorded_at: String,
    pub contract_name: String,
    pub action: String,
}

impl From<&AuditEntry> for AuditEntryResponse {
    fn from(entry: &AuditEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            timestamp: entry.timestamp_display(),
            recorded_at: entry.timestamp().to_string(),
            contract_name: entry.contract_name().to_string(),
            action: entry.action().to_string(),
        }
    }
}

/// Newest entry first.
#[derive(Debug, Clone, Serialize)]
pub struct AuditTrailResponse {
    pub entries: Vec<AuditEntryResponse>,
    pub total: usize,
}

impl From<&AuditTrail> for AuditTrailResponse {
    fn from(trail: &AuditTrail) -> Self {
        Self {
            entries: trail.entries().iter().map(AuditEntryResponse::from).collect(),
            total: trail.len(),
        }
    }
}
