//! Audit trail handlers.

mod get_audit_trail;

pub use get_audit_trail::{GetAuditTrailHandler, GetAuditTrailQuery};
