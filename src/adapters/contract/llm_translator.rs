//! AI-powered ContractTranslator implementation

use async_trait::async_trait;
use std::sync::Arc;

use super::llm_analyzer::describe_provider_error;
use crate::domain::contract::AnalysisError;
use crate::ports::{AIProvider, CompletionRequest, ContractTranslator, MessageRole, RequestMetadata};

const SYSTEM_INSTRUCTION: &str =
    "You are a professional legal translator specializing in Hindi to English translation for Indian contracts.";

/// Hindi-to-English translator backed by a generation service.
pub struct LlmContractTranslator {
    ai_provider: Arc<dyn AIProvider>,
    model: Option<String>,
}

impl LlmContractTranslator {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self {
            ai_provider,
            model: None,
        }
    }

    /// Uses `model` instead of the provider default.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    fn create_translation_prompt(text: &str) -> String {
        format!(
            "Translate the following Hindi legal contract text into formal English for analysis, preserving all legal intent: \n\n {}",
            text
        )
    }
}

#[async_trait]
impl ContractTranslator for LlmContractTranslator {
    async fn translate_to_english(&self, text: &str) -> Result<String, AnalysisError> {
        let metadata = RequestMetadata::new(
            "translate",
            format!("contract-translation-{}", uuid::Uuid::new_v4()),
        );
        let trace_id = metadata.trace_id.clone();
        let mut request = CompletionRequest::new(metadata)
            .with_system_prompt(SYSTEM_INSTRUCTION)
            .with_message(MessageRole::User, Self::create_translation_prompt(text));
        if let Some(model) = &self.model {
            request = request.with_model(model.clone());
        }

        tracing::debug!(trace_id = %trace_id, chars = text.chars().count(), "requesting translation");

        let response = self.ai_provider.complete(request).await.map_err(|e| {
            tracing::warn!(trace_id = %trace_id, error = %e, "translation call failed");
            AnalysisError::translation_failed(describe_provider_error(&e))
        })?;

        if response.content.trim().is_empty() {
            tracing::warn!(trace_id = %trace_id, "translation came back empty");
            return Err(AnalysisError::translation_failed(
                "the service returned an empty translation",
            ));
        }

        tracing::info!(
            trace_id = %trace_id,
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            "translation received"
        );
        Ok(response.content)
    }
}
