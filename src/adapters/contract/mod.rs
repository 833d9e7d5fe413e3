//! Contract adapters - generation-service backed analyzer and translator.

mod llm_analyzer;
mod llm_translator;

pub use llm_analyzer::{LlmContractAnalyzer, ANALYSIS_TEMPERATURE};
pub use llm_translator::LlmContractTranslator;
