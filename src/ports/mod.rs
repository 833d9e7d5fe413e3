//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Generation Ports
//!
//! - `AIProvider` - Provider-agnostic completion calls
//! - `ContractAnalyzer` - Contract text to validated analysis
//! - `ContractTranslator` - Hindi to English preprocessing
//!
//! ## State and Output Ports
//!
//! - `SessionStore` - Active analysis and audit trail
//! - `ReportRenderer` - Printable scorecard

mod ai_provider;
mod contract_analyzer;
mod report_renderer;
mod session_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use contract_analyzer::{ContractAnalyzer, ContractTranslator};
pub use report_renderer::{ExportFormat, ReportRenderer};
pub use session_store::SessionStore;
