//! AuditTrail - append-only, newest-first log of audit entries.

use serde::Serialize;

use super::AuditEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuditTrail {
    entries: Vec<AuditEntry>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the entry first; existing entries keep their relative order.
    pub fn append(&mut self, entry: AuditEntry) {
        self.entries.insert(0, entry);
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// The `n` newest entries.
    pub fn recent(&self, n: usize) -> &[AuditEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
