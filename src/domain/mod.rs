//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `contract` - Submissions, analyses, clauses and the scorecard view
//! - `audit` - Append-only audit trail
//! - `template` - Static contract template catalog
//! - `dashboard` - Dashboard read model
//! - `session` - Active analysis and audit trail state with named transitions

pub mod audit;
pub mod contract;
pub mod dashboard;
pub mod foundation;
pub mod session;
pub mod template;
