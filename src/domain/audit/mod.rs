//! Audit domain - the session's record of completed analyses and exports.

mod entry;
mod trail;

pub use entry::{AuditEntry, ACTION_ANALYSIS_COMPLETED, ACTION_REPORT_EXPORTED};
pub use trail::AuditTrail;
