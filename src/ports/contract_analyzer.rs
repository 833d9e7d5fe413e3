//! Contract analysis ports - the two calls a submission makes to the
//! generation service.

use async_trait::async_trait;

use crate::domain::contract::{AnalysisError, ContractAnalysis};

/// Turns English contract text into a validated [`ContractAnalysis`].
///
/// # Contract
///
/// Implementations must:
/// - Return either a fully validated analysis or `AnalysisFailed`, never a partial result
/// - Make exactly one external call per invocation, with no retry
#[async_trait]
pub trait ContractAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<ContractAnalysis, AnalysisError>;
}

/// Translates Hindi contract text into formal English.
///
/// Failures are reported as `TranslationFailed`. A blank translation counts
/// as a failure.
#[async_trait]
pub trait ContractTranslator: Send + Sync {
    async fn translate_to_english(&self, text: &str) -> Result<String, AnalysisError>;
}
