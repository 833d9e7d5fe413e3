//! Report Adapters
//!
//! Implementations of the ReportRenderer port.

mod scorecard_renderer;

pub use scorecard_renderer::ScorecardRenderer;
