//! ScorecardView - read model for the active analysis.

use serde::Serialize;

use crate::domain::foundation::{RiskLevel, RiskScore, Timestamp};

use super::{Clause, ContractAnalysis, RiskFilter};

/// A clause as the scorecard shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseView {
    pub id: String,
    pub category: String,
    pub risk_level: RiskLevel,
    pub is_unfavorable: bool,
    pub original_text: String,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&Clause> for ClauseView {
    fn from(clause: &Clause) -> Self {
        Self {
            id: clause.id.clone(),
            category: clause.category.clone(),
            risk_level: clause.risk_level,
            is_unfavorable: clause.is_unfavorable,
            original_text: clause.original_text.clone(),
            explanation: clause.explanation.clone(),
            suggestion: clause.display_suggestion().map(String::from),
        }
    }
}

/// Clause totals per risk level, computed over the unfiltered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unfavorable: usize,
}

/// Everything the scorecard renders for one analysis under one filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardView {
    pub contract_name: String,
    pub analyzed_at: String,
    pub contract_type: String,
    pub parties: Vec<String>,
    pub jurisdiction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<String>,
    pub summary: String,
    pub risk_score: RiskScore,
    pub risk_band: RiskLevel,
    pub filter: RiskFilter,
    pub filter_options: Vec<RiskFilter>,
    pub counts: RiskCounts,
    pub clauses: Vec<ClauseView>,
    pub suggested_renegotiation_points: Vec<String>,
    pub missing_crucial_terms: Vec<String>,
}

impl ScorecardView {
    pub fn build(
        contract_name: &str,
        analyzed_at: Timestamp,
        analysis: &ContractAnalysis,
        filter: RiskFilter,
    ) -> Self {
        let counts = RiskCounts {
            high: analysis.count_at(RiskLevel::High),
            medium: analysis.count_at(RiskLevel::Medium),
            low: analysis.count_at(RiskLevel::Low),
            unfavorable: analysis.unfavorable_count(),
        };

        Self {
            contract_name: contract_name.to_string(),
            analyzed_at: analyzed_at.to_display_string(),
            contract_type: analysis.contract_type.clone(),
            parties: analysis.parties.clone(),
            jurisdiction: analysis.jurisdiction.clone(),
            financial_amount: analysis.financial_amount.clone(),
            effective_date: analysis.effective_date.clone(),
            termination_date: analysis.termination_date.clone(),
            summary: analysis.summary.clone(),
            risk_score: analysis.composite_risk_score,
            risk_band: analysis.composite_risk_score.band(),
            filter,
            filter_options: RiskFilter::OPTIONS.to_vec(),
            counts,
            clauses: filter
                .apply(&analysis.clauses)
                .into_iter()
                .map(ClauseView::from)
                .collect(),
            suggested_renegotiation_points: analysis.suggested_renegotiation_points.clone(),
            missing_crucial_terms: analysis.missing_crucial_terms.clone(),
        }
    }
}
