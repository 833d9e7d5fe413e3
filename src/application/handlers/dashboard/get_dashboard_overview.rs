//! GetDashboardOverviewHandler - Query handler for retrieving dashboard overview.
//!
//! Combines the session audit trail with the fixed dashboard cards.

use std::sync::Arc;

use crate::domain::dashboard::DashboardOverview;
use crate::ports::SessionStore;

/// Query to get the dashboard overview for the current session.
#[derive(Debug, Clone, Default)]
pub struct GetDashboardOverviewQuery;

/// Result of successful dashboard overview query.
pub type GetDashboardOverviewResult = DashboardOverview;

/// Handler for retrieving dashboard overview.
pub struct GetDashboardOverviewHandler {
    store: Arc<dyn SessionStore>,
}

impl GetDashboardOverviewHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: GetDashboardOverviewQuery) -> GetDashboardOverviewResult {
        let trail = self.store.audit_trail().await;
        DashboardOverview::from_trail(&trail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::audit::AuditEntry;

    #[tokio::test]
    async fn overview_of_fresh_session() {
        let handler = GetDashboardOverviewHandler::new(Arc::new(InMemorySessionStore::new()));

        let overview = handler.handle(GetDashboardOverviewQuery).await;

        assert_eq!(overview.total_audits, 0);
        assert!(overview.recent_audits.is_empty());
        assert_eq!(overview.weekly_activity.len(), 7);
    }

    #[tokio::test]
    async fn overview_reflects_audit_trail() {
        let store = Arc::new(InMemorySessionStore::new());
        for i in 0..7 {
            store
                .append_audit_entry(AuditEntry::record(format!("Contract {}", i), "Analysis Completed"))
                .await;
        }
        let handler = GetDashboardOverviewHandler::new(store);

        let overview = handler.handle(GetDashboardOverviewQuery).await;

        assert_eq!(overview.total_audits, 7);
        assert_eq!(overview.recent_audits.len(), 5);
        assert_eq!(overview.recent_audits[0].contract_name, "Contract 6");
    }
}
