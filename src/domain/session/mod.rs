//! Session domain module.
//!
//! The in-process state shared by every request: the active analysis and
//! the audit trail.

mod errors;
mod state;

pub use errors::SessionError;
pub use state::{ActiveAnalysis, AnalysisTicket, SessionState};
