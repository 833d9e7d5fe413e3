//! SessionState - the single mutable state of a running service.
//!
//! Holds at most one active analysis plus the audit trail. Only the named
//! transitions below mutate it.
//!
//! # Superseding
//!
//! Overlapping submissions are allowed. Each one takes an [`AnalysisTicket`]
//! from [`SessionState::begin_analysis`]; only the most recently issued
//! ticket may commit. A ticket is superseded as soon as a newer one exists,
//! even if the newer submission later fails.

use serde::Serialize;

use crate::domain::audit::{AuditEntry, AuditTrail};
use crate::domain::contract::ContractAnalysis;
use crate::domain::foundation::Timestamp;

use super::SessionError;

/// Permission to commit the result of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AnalysisTicket(u64);

impl AnalysisTicket {
    pub fn from_sequence(sequence: u64) -> Self {
        Self(sequence)
    }

    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// The committed result of the latest successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveAnalysis {
    pub contract_name: String,
    pub analysis: ContractAnalysis,
    pub analyzed_at: Timestamp,
}

impl ActiveAnalysis {
    pub fn new(contract_name: impl Into<String>, analysis: ContractAnalysis) -> Self {
        Self {
            contract_name: contract_name.into(),
            analysis,
            analyzed_at: Timestamp::now(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    active: Option<ActiveAnalysis>,
    audit_trail: AuditTrail,
    last_issued: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_analysis(&self) -> Option<&ActiveAnalysis> {
        self.active.as_ref()
    }

    pub fn audit_trail(&self) -> &AuditTrail {
        &self.audit_trail
    }

    /// Issues the next ticket. Every previously issued ticket becomes stale.
    pub fn begin_analysis(&mut self) -> AnalysisTicket {
        self.last_issued += 1;
        AnalysisTicket(self.last_issued)
    }

    /// Replaces the active analysis in whole.
    ///
    /// # Errors
    ///
    /// - `Superseded` if a newer ticket has been issued; state is unchanged
    pub fn set_active_analysis(
        &mut self,
        ticket: AnalysisTicket,
        active: ActiveAnalysis,
    ) -> Result<(), SessionError> {
        let latest = AnalysisTicket(self.last_issued);
        if ticket != latest {
            return Err(SessionError::superseded(ticket, latest));
        }
        self.active = Some(active);
        Ok(())
    }

    pub fn append_audit_entry(&mut self, entry: AuditEntry) {
        self.audit_trail.append(entry);
    }
}
