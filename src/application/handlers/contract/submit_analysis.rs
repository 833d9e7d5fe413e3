//! SubmitAnalysisHandler - runs one submission through translation, analysis and commit.

use std::sync::Arc;

use crate::domain::audit::{AuditEntry, ACTION_ANALYSIS_COMPLETED};
use crate::domain::contract::{AnalysisError, ContractSubmission, SourceLanguage};
use crate::domain::session::{ActiveAnalysis, AnalysisTicket, SessionError};
use crate::ports::{ContractAnalyzer, ContractTranslator, SessionStore};

/// Command to analyze pasted contract text.
#[derive(Debug, Clone)]
pub struct SubmitAnalysisCommand {
    pub contract_name: String,
    pub text: String,
    pub source_language: SourceLanguage,
}

/// Result of a committed analysis.
#[derive(Debug, Clone)]
pub struct SubmitAnalysisResult {
    pub ticket: AnalysisTicket,
    pub active: ActiveAnalysis,
    pub audit_entry: AuditEntry,
}

/// Handler for contract submissions.
///
/// Steps run strictly in order: validate, take a ticket, translate (Hindi
/// only), analyze, commit, audit. Any failure stops the pipeline and leaves
/// the stored session untouched.
pub struct SubmitAnalysisHandler {
    analyzer: Arc<dyn ContractAnalyzer>,
    translator: Arc<dyn ContractTranslator>,
    store: Arc<dyn SessionStore>,
}

impl SubmitAnalysisHandler {
    pub fn new(
        analyzer: Arc<dyn ContractAnalyzer>,
        translator: Arc<dyn ContractTranslator>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            analyzer,
            translator,
            store,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAnalysisCommand,
    ) -> Result<SubmitAnalysisResult, AnalysisError> {
        let submission = ContractSubmission::new(cmd.contract_name, cmd.text, cmd.source_language)
            .map_err(|e| {
                tracing::debug!("submission rejected before any external call");
                e
            })?;
        self.handle_submission(submission).await
    }

    /// Runs an already validated submission (pasted text, upload or local file).
    pub async fn handle_submission(
        &self,
        submission: ContractSubmission,
    ) -> Result<SubmitAnalysisResult, AnalysisError> {
        // 1. Take a ticket before the first external call
        let ticket = self.store.begin_analysis().await;
        tracing::info!(
            ticket = ticket.sequence(),
            contract = %submission.contract_name(),
            language = ?submission.source_language(),
            "analysis started"
        );

        // 2. Translate Hindi input; the translation is the analysis input verbatim
        let translated;
        let analysis_input = if submission.source_language().needs_translation() {
            translated = self.translator.translate_to_english(submission.text()).await?;
            translated.as_str()
        } else {
            submission.text()
        };

        // 3. Analyze
        let analysis = self.analyzer.analyze(analysis_input).await?;

        // 4. Commit, unless a newer submission has started meanwhile
        let active = ActiveAnalysis::new(submission.contract_name(), analysis);
        self.store
            .set_active_analysis(ticket, active.clone())
            .await
            .map_err(|e| match e {
                SessionError::Superseded { .. } => AnalysisError::Superseded,
                SessionError::NoActiveAnalysis => AnalysisError::analysis_failed(e.to_string()),
            })?;

        // 5. Audit
        let audit_entry = AuditEntry::record(submission.contract_name(), ACTION_ANALYSIS_COMPLETED);
        self.store.append_audit_entry(audit_entry.clone()).await;

        Ok(SubmitAnalysisResult {
            ticket,
            active,
            audit_entry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::contract::{LlmContractAnalyzer, LlmContractTranslator};
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::contract::RiskFilter;
    use crate::domain::foundation::RiskLevel;

    const HIGH_RISK_REPLY: &str = r#"{
        "contractType": "Employment Agreement",
        "parties": ["Acme Pvt Ltd", "Employee"],
        "jurisdiction": "India",
        "compositeRiskScore": 85,
        "summary": "One-sided restraint of trade.",
        "clauses": [{
            "id": "c1",
            "originalText": "Employee shall not compete for 5 years",
            "explanation": "Five-year restraint is likely unenforceable under Section 27.",
            "riskLevel": "High",
            "category": "Non-Compete",
            "isUnfavorable": true
        }]
    }"#;

    struct Fixture {
        provider: Arc<MockAIProvider>,
        store: Arc<InMemorySessionStore>,
        handler: SubmitAnalysisHandler,
    }

    fn fixture(provider: MockAIProvider) -> Fixture {
        let provider = Arc::new(provider);
        let store = Arc::new(InMemorySessionStore::new());
        let handler = SubmitAnalysisHandler::new(
            Arc::new(LlmContractAnalyzer::new(provider.clone())),
            Arc::new(LlmContractTranslator::new(provider.clone())),
            store.clone(),
        );
        Fixture {
            provider,
            store,
            handler,
        }
    }

    fn command(name: &str, text: &str, language: SourceLanguage) -> SubmitAnalysisCommand {
        SubmitAnalysisCommand {
            contract_name: name.to_string(),
            text: text.to_string(),
            source_language: language,
        }
    }

    #[tokio::test]
    async fn high_risk_scenario_commits_and_filters() {
        let f = fixture(MockAIProvider::new().with_response(HIGH_RISK_REPLY));

        let result = f
            .handler
            .handle(command(
                "Offer Letter",
                "Employee shall not compete for 5 years",
                SourceLanguage::English,
            ))
            .await
            .unwrap();

        let active = f.store.active_analysis().await.unwrap();
        assert_eq!(active.analysis.composite_risk_score.value(), 85);
        assert_eq!(
            RiskFilter::Only(RiskLevel::High).apply(&active.analysis.clauses).len(),
            1
        );
        assert!(RiskFilter::Only(RiskLevel::Low)
            .apply(&active.analysis.clauses)
            .is_empty());
        assert_eq!(result.audit_entry.action(), "Analysis Completed");
        assert_eq!(result.audit_entry.contract_name(), "Offer Letter");
        assert_eq!(f.store.audit_trail().await.len(), 1);
    }

    #[tokio::test]
    async fn network_error_leaves_state_empty_on_first_use() {
        let f = fixture(MockAIProvider::new().with_error(MockError::Network {
            message: "connection refused".to_string(),
        }));

        let err = f
            .handler
            .handle(command("Lease", "Some terms", SourceLanguage::English))
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::AnalysisFailed { .. }));
        assert!(f.store.active_analysis().await.is_none());
        assert!(f.store.audit_trail().await.is_empty());
    }

    #[tokio::test]
    async fn failure_keeps_previous_analysis() {
        let f = fixture(
            MockAIProvider::new()
                .with_response(HIGH_RISK_REPLY)
                .with_error(MockError::Unavailable {
                    message: "overloaded".to_string(),
                }),
        );
        f.handler
            .handle(command("First", "terms", SourceLanguage::English))
            .await
            .unwrap();

        let result = f
            .handler
            .handle(command("Second", "terms", SourceLanguage::English))
            .await;

        assert!(result.is_err());
        assert_eq!(f.store.active_analysis().await.unwrap().contract_name, "First");
        assert_eq!(f.store.audit_trail().await.len(), 1);
    }

    #[tokio::test]
    async fn hindi_translation_feeds_analysis_verbatim() {
        let f = fixture(
            MockAIProvider::new()
                .with_response("Hello world")
                .with_response(HIGH_RISK_REPLY),
        );

        f.handler
            .handle(command("Hindi Lease", "नमस्ते दुनिया", SourceLanguage::Hindi))
            .await
            .unwrap();

        let calls = f.provider.get_calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].user_text().unwrap().ends_with("नमस्ते दुनिया"));
        assert_eq!(
            calls[1].user_text(),
            Some("Analyze the following contract text: \n\n Hello world")
        );
    }

    #[tokio::test]
    async fn translation_failure_skips_analysis() {
        let f = fixture(MockAIProvider::new().with_error(MockError::Timeout { timeout_secs: 30 }));

        let err = f
            .handler
            .handle(command("Hindi Lease", "पाठ", SourceLanguage::Hindi))
            .await
            .unwrap_err();

        assert!(matches!(err, AnalysisError::TranslationFailed { .. }));
        assert_eq!(f.provider.call_count(), 1);
        assert!(f.store.active_analysis().await.is_none());
    }

    #[tokio::test]
    async fn incomplete_input_makes_no_calls() {
        let f = fixture(MockAIProvider::new());

        for (name, text) in [("", "terms"), ("Lease", ""), ("  ", "  ")] {
            let err = f
                .handler
                .handle(command(name, text, SourceLanguage::Hindi))
                .await
                .unwrap_err();
            assert_eq!(err, AnalysisError::InputIncomplete);
        }
        assert_eq!(f.provider.call_count(), 0);
    }

    #[tokio::test]
    async fn superseded_result_is_discarded() {
        let f = fixture(
            MockAIProvider::new()
                .with_response(HIGH_RISK_REPLY)
                .with_delay(std::time::Duration::from_millis(100)),
        );
        let submission = ContractSubmission::new("Old", "terms", SourceLanguage::English).unwrap();

        let newer_start = {
            let store = f.store.clone();
            async move {
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                store.begin_analysis().await
            }
        };
        let (result, newer) = tokio::join!(f.handler.handle_submission(submission), newer_start);

        assert_eq!(result.unwrap_err(), AnalysisError::Superseded);
        assert_eq!(newer.sequence(), 2);
        assert!(f.store.active_analysis().await.is_none());
        assert!(f.store.audit_trail().await.is_empty());
    }
}
