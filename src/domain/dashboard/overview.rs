use serde::Serialize;

use crate::domain::audit::{AuditEntry, AuditTrail};
use crate::domain::foundation::RiskLevel;

/// Number of audit entries shown in the "recent audits" panel.
pub const RECENT_AUDIT_LIMIT: usize = 5;

/// The main dashboard overview
///
/// Only `total_audits` and `recent_audits` are derived from the session;
/// the remaining cards are fixed figures until real statistics exist.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub total_audits: usize,

    /// Placeholder cards
    pub high_risks_flagged: String,
    pub savings_identified: String,
    pub pending_reviews: String,

    /// Audits per weekday, Monday first
    pub weekly_activity: Vec<ActivityPoint>,

    /// Share of clauses per risk level, in percent
    pub risk_distribution: Vec<RiskShare>,

    /// Newest first, at most `RECENT_AUDIT_LIMIT`
    pub recent_audits: Vec<RecentAudit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPoint {
    pub day: &'static str,
    pub audits: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskShare {
    pub level: RiskLevel,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentAudit {
    pub contract_name: String,
    pub action: String,
    pub timestamp: String,
}

impl From<&AuditEntry> for RecentAudit {
    fn from(entry: &AuditEntry) -> Self {
        Self {
            contract_name: entry.contract_name().to_string(),
            action: entry.action().to_string(),
            timestamp: entry.timestamp_display(),
        }
    }
}

const WEEKLY_ACTIVITY: [(&str, u32); 7] = [
    ("Mon", 4),
    ("Tue", 7),
    ("Wed", 2),
    ("Thu", 5),
    ("Fri", 8),
    ("Sat", 1),
    ("Sun", 0),
];

const RISK_DISTRIBUTION: [(RiskLevel, u8); 3] = [
    (RiskLevel::Low, 45),
    (RiskLevel::Medium, 30),
    (RiskLevel::High, 25),
];

impl DashboardOverview {
    pub fn from_trail(trail: &AuditTrail) -> Self {
        Self {
            total_audits: trail.len(),
            high_risks_flagged: "12".to_string(),
            savings_identified: "₹42,500".to_string(),
            pending_reviews: "3".to_string(),
            weekly_activity: WEEKLY_ACTIVITY
                .iter()
                .map(|(day, audits)| ActivityPoint { day, audits: *audits })
                .collect(),
            risk_distribution: RISK_DISTRIBUTION
                .iter()
                .map(|(level, percent)| RiskShare {
                    level: *level,
                    percent: *percent,
                })
                .collect(),
            recent_audits: trail
                .recent(RECENT_AUDIT_LIMIT)
                .iter()
                .map(RecentAudit::from)
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
