//! HTTP adapter for the audit trail.

mod dto;
mod handlers;
mod routes;

pub use dto::{AuditEntryResponse, AuditTrailParams, AuditTrailResponse};
pub use handlers::AuditAppState;
pub use routes::audit_routes;
