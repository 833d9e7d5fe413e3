//! Wiring from configuration to ready-to-use handlers.
//!
//! Shared by the HTTP server and the one-shot CLI commands.

use std::sync::Arc;

use crate::adapters::ai::{GeminiConfig, GeminiProvider, MockAIProvider, OpenAIConfig, OpenAIProvider};
use crate::adapters::contract::{LlmContractAnalyzer, LlmContractTranslator};
use crate::adapters::report::ScorecardRenderer;
use crate::adapters::storage::InMemorySessionStore;
use crate::application::handlers::{
    ExportReportHandler, GetAuditTrailHandler, GetDashboardOverviewHandler, GetScorecardHandler,
    GetTemplateHandler, ListTemplatesHandler, SubmitAnalysisHandler,
};
use crate::config::{AiConfig, AiProvider};
use crate::domain::template::TemplateCatalog;
use crate::ports::{AIError, AIProvider as GenerationService, SessionStore};

/// Builds the generation service named by the configuration.
///
/// An absent API key is passed through as an empty key; the provider
/// rejects it on first use.
pub fn build_provider(config: &AiConfig) -> Result<Arc<dyn GenerationService>, AIError> {
    let provider: Arc<dyn GenerationService> = match config.provider {
        AiProvider::Gemini => {
            let mut gemini = GeminiConfig::new(config.api_key()).with_model(&config.analysis_model);
            if let Some(url) = &config.base_url {
                gemini = gemini.with_base_url(url);
            }
            if let Some(timeout) = config.timeout() {
                gemini = gemini.with_timeout(timeout);
            }
            Arc::new(GeminiProvider::new(gemini)?)
        }
        AiProvider::OpenAI => {
            let mut openai = OpenAIConfig::new(config.api_key()).with_model(&config.analysis_model);
            if let Some(url) = &config.base_url {
                openai = openai.with_base_url(url);
            }
            if let Some(timeout) = config.timeout() {
                openai = openai.with_timeout(timeout);
            }
            Arc::new(OpenAIProvider::new(openai)?)
        }
        AiProvider::Mock => Arc::new(MockAIProvider::new()),
    };

    if !config.has_api_key() && config.provider != AiProvider::Mock {
        tracing::warn!("no API key configured; analysis requests will fail until one is set");
    }
    let info = provider.provider_info();
    tracing::info!(provider = %info.name, model = %info.model, "generation service ready");

    Ok(provider)
}

/// Every application handler, sharing one session store.
#[derive(Clone)]
pub struct Services {
    pub store: Arc<InMemorySessionStore>,
    pub submit_analysis: Arc<SubmitAnalysisHandler>,
    pub get_scorecard: Arc<GetScorecardHandler>,
    pub export_report: Arc<ExportReportHandler>,
    pub list_templates: Arc<ListTemplatesHandler>,
    pub get_template: Arc<GetTemplateHandler>,
    pub get_audit_trail: Arc<GetAuditTrailHandler>,
    pub get_dashboard: Arc<GetDashboardOverviewHandler>,
}

impl Services {
    pub fn new(provider: Arc<dyn GenerationService>, config: &AiConfig) -> Self {
        let analyzer = LlmContractAnalyzer::new(provider.clone())
            .with_model(&config.analysis_model)
            .with_temperature(config.temperature);
        let translator =
            LlmContractTranslator::new(provider).with_model(&config.translation_model);
        Self::with_adapters(Arc::new(analyzer), Arc::new(translator))
    }

    /// Wires handlers around the given analysis and translation adapters.
    pub fn with_adapters(
        analyzer: Arc<dyn crate::ports::ContractAnalyzer>,
        translator: Arc<dyn crate::ports::ContractTranslator>,
    ) -> Self {
        let store = Arc::new(InMemorySessionStore::new());
        let session: Arc<dyn SessionStore> = store.clone();
        let catalog = Arc::new(TemplateCatalog::builtin().clone());

        Self {
            submit_analysis: Arc::new(SubmitAnalysisHandler::new(
                analyzer,
                translator,
                session.clone(),
            )),
            get_scorecard: Arc::new(GetScorecardHandler::new(session.clone())),
            export_report: Arc::new(ExportReportHandler::new(
                session.clone(),
                Arc::new(ScorecardRenderer::new()),
            )),
            list_templates: Arc::new(ListTemplatesHandler::new(catalog.clone())),
            get_template: Arc::new(GetTemplateHandler::new(catalog)),
            get_audit_trail: Arc::new(GetAuditTrailHandler::new(session.clone())),
            get_dashboard: Arc::new(GetDashboardOverviewHandler::new(session)),
            store,
        }
    }
}
