//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Generation service clients (Gemini, OpenAI, mock)
//! - `contract` - Analyzer and translator built on a generation service
//! - `storage` - In-memory session store
//! - `report` - Markdown/HTML scorecard rendering
//! - `http` - REST API

pub mod ai;
pub mod contract;
pub mod http;
pub mod report;
pub mod storage;

pub use ai::{GeminiProvider, MockAIProvider, OpenAIProvider};
pub use contract::{LlmContractAnalyzer, LlmContractTranslator};
pub use report::ScorecardRenderer;
pub use storage::InMemorySessionStore;
