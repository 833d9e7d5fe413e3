//! GetAuditTrailHandler - Query handler for the session audit log.

use std::sync::Arc;

use crate::domain::audit::AuditTrail;
use crate::ports::SessionStore;

/// Query for the audit trail, newest first. `limit` caps the number of entries.
#[derive(Debug, Clone, Default)]
pub struct GetAuditTrailQuery {
    pub limit: Option<usize>,
}

pub struct GetAuditTrailHandler {
    store: Arc<dyn SessionStore>,
}

impl GetAuditTrailHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetAuditTrailQuery) -> AuditTrail {
        let trail = self.store.audit_trail().await;
        match query.limit {
            Some(limit) if limit < trail.len() => {
                let mut limited = AuditTrail::new();
                for entry in trail.recent(limit).iter().rev() {
                    limited.append(entry.clone());
                }
                limited
            }
            _ => trail,
        }
    }
}
