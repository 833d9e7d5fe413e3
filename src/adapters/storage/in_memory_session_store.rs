//! In-Memory Session Store Adapter
//!
//! Holds the session state for the lifetime of the process. Nothing is
//! persisted; a restart starts from an empty session.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::audit::{AuditEntry, AuditTrail};
use crate::domain::session::{ActiveAnalysis, AnalysisTicket, SessionError, SessionState};
use crate::ports::SessionStore;

/// In-memory session store shared by every request handler
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    state: Arc<RwLock<SessionState>>,
}

impl InMemorySessionStore {
    /// Create a store with an empty session
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn begin_analysis(&self) -> AnalysisTicket {
        let ticket = self.state.write().await.begin_analysis();
        tracing::debug!(ticket = ticket.sequence(), "analysis ticket issued");
        ticket
    }

    async fn set_active_analysis(
        &self,
        ticket: AnalysisTicket,
        active: ActiveAnalysis,
    ) -> Result<(), SessionError> {
        let mut state = self.state.write().await;
        let contract_name = active.contract_name.clone();
        match state.set_active_analysis(ticket, active) {
            Ok(()) => {
                tracing::info!(
                    ticket = ticket.sequence(),
                    contract = %contract_name,
                    "active analysis replaced"
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(ticket = ticket.sequence(), error = %err, "stale analysis discarded");
                Err(err)
            }
        }
    }

    async fn append_audit_entry(&self, entry: AuditEntry) {
        self.state.write().await.append_audit_entry(entry);
    }

    async fn active_analysis(&self) -> Option<ActiveAnalysis> {
        self.state.read().await.active_analysis().cloned()
    }

    async fn audit_trail(&self) -> AuditTrail {
        self.state.read().await.audit_trail().clone()
    }
}
