//! Clause - one extracted contractual provision.

use serde::Serialize;

use crate::domain::foundation::RiskLevel;

/// Text shown when an unfavorable clause arrives without an alternative.
pub const MISSING_SUGGESTION_PLACEHOLDER: &str = "No alternative wording was suggested for this clause.";

/// A single provision of an analyzed contract.
///
/// Owned by exactly one [`ContractAnalysis`](super::ContractAnalysis); the
/// identifier is unique within that analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Clause {
    pub id: String,
    pub original_text: String,
    pub explanation: String,
    pub risk_level: RiskLevel,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub is_unfavorable: bool,
}

impl Clause {
    /// The alternative wording to display for an unfavorable clause.
    ///
    /// Returns `None` for favorable clauses. Unfavorable clauses without a
    /// suggestion get a placeholder instead of failing.
    pub fn display_suggestion(&self) -> Option<&str> {
        if !self.is_unfavorable {
            return None;
        }
        Some(
            self.suggestion
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(MISSING_SUGGESTION_PLACEHOLDER),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(is_unfavorable: bool, suggestion: Option<&str>) -> Clause {
        Clause {
            id: "c1".to_string(),
            original_text: "Employee shall not compete for 5 years".to_string(),
            explanation: "You cannot work for a competitor for five years.".to_string(),
            risk_level: RiskLevel::High,
            category: "Non-Compete".to_string(),
            suggestion: suggestion.map(String::from),
            is_unfavorable,
        }
    }

    #[test]
    fn favorable_clause_has_no_display_suggestion() {
        assert_eq!(clause(false, Some("ignored")).display_suggestion(), None);
    }

    #[test]
    fn unfavorable_clause_shows_suggestion() {
        let c = clause(true, Some("Limit to 1 year within the same city"));
        assert_eq!(c.display_suggestion(), Some("Limit to 1 year within the same city"));
    }

    #[test]
    fn unfavorable_clause_without_suggestion_shows_placeholder() {
        assert_eq!(
            clause(true, None).display_suggestion(),
            Some(MISSING_SUGGESTION_PLACEHOLDER)
        );
        assert_eq!(
            clause(true, Some("  ")).display_suggestion(),
            Some(MISSING_SUGGESTION_PLACEHOLDER)
        );
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(clause(true, None)).unwrap();
        assert_eq!(json["originalText"], "Employee shall not compete for 5 years");
        assert_eq!(json["riskLevel"], "High");
        assert_eq!(json["isUnfavorable"], true);
        assert!(json.get("suggestion").is_none());
    }
}
