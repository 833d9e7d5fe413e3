//! Contract domain - submissions, analyses, clauses and the scorecard view.

mod analysis;
mod clause;
mod errors;
mod filter;
mod schema;
mod scorecard;
mod submission;

pub use analysis::ContractAnalysis;
pub use clause::{Clause, MISSING_SUGGESTION_PLACEHOLDER};
pub use errors::AnalysisError;
pub use filter::RiskFilter;
pub use schema::{analysis_response_schema, REQUIRED_CLAUSE_FIELDS, REQUIRED_FIELDS};
pub use scorecard::{ClauseView, RiskCounts, ScorecardView};
pub use submission::{contract_name_from_file, ContractSubmission, SourceLanguage};
