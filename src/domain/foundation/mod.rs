//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the contract analysis domain.

mod ids;
mod timestamp;
mod risk_level;
mod risk_score;
mod errors;

pub use ids::{AuditEntryId, TemplateId};
pub use timestamp::Timestamp;
pub use risk_level::RiskLevel;
pub use risk_score::RiskScore;
pub use errors::{DomainError, ErrorCode, ValidationError};
