//! Session Store Port - shared access to the process-lifetime session state.

use async_trait::async_trait;

use crate::domain::audit::{AuditEntry, AuditTrail};
use crate::domain::session::{ActiveAnalysis, AnalysisTicket, SessionError};

/// Port for reading and mutating the session state.
///
/// Every mutation goes through one of the named transitions; there is no
/// generic setter.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Issue a ticket for a submission that is about to call out.
    async fn begin_analysis(&self) -> AnalysisTicket;

    /// Commit a completed analysis.
    ///
    /// # Errors
    ///
    /// `Superseded` if a newer ticket exists; the stored state is unchanged.
    async fn set_active_analysis(
        &self,
        ticket: AnalysisTicket,
        active: ActiveAnalysis,
    ) -> Result<(), SessionError>;

    /// Record an action at the head of the audit trail.
    async fn append_audit_entry(&self, entry: AuditEntry);

    /// Snapshot of the active analysis, if any.
    async fn active_analysis(&self) -> Option<ActiveAnalysis>;

    /// Snapshot of the audit trail, newest first.
    async fn audit_trail(&self) -> AuditTrail;
}
