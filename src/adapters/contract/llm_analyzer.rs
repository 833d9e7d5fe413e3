//! AI-powered ContractAnalyzer implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::contract::{analysis_response_schema, AnalysisError, ContractAnalysis};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, ContractAnalyzer, MessageRole, RequestMetadata,
};

/// Default determinism hint sent with analysis calls.
pub const ANALYSIS_TEMPERATURE: f32 = 0.1;

const SYSTEM_INSTRUCTION: &str = r#"You are an expert Indian Legal Assistant specialized in helping Small and Medium Enterprises (SMEs).
Your goal is to analyze business contracts and identify risks, explaining them in simple plain language.
Ensure you check for compliance with Indian laws (e.g., Indian Contract Act, 1872).

For the provided contract text, extract:
1. Contract Type
2. Key Parties
3. Jurisdiction (Governing Law)
4. Key Dates (Effective, Termination)
5. Financial Values mentioned
6. Analysis of every major clause including:
   - Plain language explanation
   - Risk level (Low/Medium/High)
   - Specific suggestions for alternatives if unfavorable
7. A composite risk score (0 to 100, where 100 is extremely risky)
8. Summary of the entire agreement.
9. List of missing crucial terms standard for this contract type in India.
10. Points the SME should try to renegotiate.

The output MUST be in valid JSON format according to the provided schema."#;

/// Analyzer backed by a generation service.
pub struct LlmContractAnalyzer {
    ai_provider: Arc<dyn AIProvider>,
    model: Option<String>,
    temperature: f32,
}

impl LlmContractAnalyzer {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self {
            ai_provider,
            model: None,
            temperature: ANALYSIS_TEMPERATURE,
        }
    }

    /// Uses `model` instead of the provider default.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn create_analysis_prompt(text: &str) -> String {
        format!("Analyze the following contract text: \n\n {}", text)
    }

    fn build_request(&self, text: &str) -> CompletionRequest {
        let metadata = RequestMetadata::new(
            "analyze",
            format!("contract-analysis-{}", uuid::Uuid::new_v4()),
        );
        let request = CompletionRequest::new(metadata)
            .with_system_prompt(SYSTEM_INSTRUCTION)
            .with_message(MessageRole::User, Self::create_analysis_prompt(text))
            .with_temperature(self.temperature)
            .with_json_schema(analysis_response_schema());
        match &self.model {
            Some(model) => request.with_model(model.clone()),
            None => request,
        }
    }
}

/// User-facing wording for a provider failure.
pub(super) fn describe_provider_error(err: &AIError) -> String {
    match err {
        AIError::AuthenticationFailed => {
            "the generation service rejected the credentials; check that a valid API key is configured"
                .to_string()
        }
        other if other.is_retryable() => format!("{}; please try again", other),
        other => other.to_string(),
    }
}

#[async_trait]
impl ContractAnalyzer for LlmContractAnalyzer {
    async fn analyze(&self, text: &str) -> Result<ContractAnalysis, AnalysisError> {
        let request = self.build_request(text);
        let trace_id = request.metadata.trace_id.clone();

        tracing::debug!(
            trace_id = %trace_id,
            estimated_tokens = self.ai_provider.estimate_tokens(text),
            "requesting contract analysis"
        );

        let response = self.ai_provider.complete(request).await.map_err(|e| {
            tracing::warn!(trace_id = %trace_id, error = %e, "analysis call failed");
            AnalysisError::analysis_failed(describe_provider_error(&e))
        })?;

        let analysis = ContractAnalysis::from_model_output(&response.content).map_err(|e| {
            tracing::warn!(trace_id = %trace_id, error = %e, "analysis reply rejected");
            AnalysisError::analysis_failed(format!(
                "the service returned an analysis that could not be read ({})",
                e
            ))
        })?;

        tracing::info!(
            trace_id = %trace_id,
            model = %response.model,
            clauses = analysis.clauses.len(),
            score = analysis.composite_risk_score.value(),
            total_tokens = response.usage.total_tokens,
            "contract analysis received"
        );

        Ok(analysis)
    }
}
