//! AuditEntry - immutable record of one completed action.

use serde::Serialize;

use crate::domain::foundation::{AuditEntryId, Timestamp};

/// Action recorded after a successful analysis commit.
pub const ACTION_ANALYSIS_COMPLETED: &str = "Analysis Completed";

/// Action recorded after a report export.
pub const ACTION_REPORT_EXPORTED: &str = "Report Exported";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    id: AuditEntryId,
    timestamp: Timestamp,
    contract_name: String,
    action: String,
}

impl AuditEntry {
    /// Records an action happening now, with a fresh random id.
    pub fn record(contract_name: impl Into<String>, action: impl Into<String>) -> Self {
        Self::reconstitute(
            AuditEntryId::new(),
            Timestamp::now(),
            contract_name,
            action,
        )
    }

    pub fn reconstitute(
        id: AuditEntryId,
        timestamp: Timestamp,
        contract_name: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            contract_name: contract_name.into(),
            action: action.into(),
        }
    }

    pub fn id(&self) -> AuditEntryId {
        self.id
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn timestamp_display(&self) -> String {
        self.timestamp.to_display_string()
    }

    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}
