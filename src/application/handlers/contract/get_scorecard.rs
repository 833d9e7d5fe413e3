//! GetScorecardHandler - Query handler for the active analysis scorecard.

use std::sync::Arc;

use crate::domain::contract::{RiskFilter, ScorecardView};
use crate::domain::session::SessionError;
use crate::ports::SessionStore;

/// Query for the scorecard under a clause filter.
#[derive(Debug, Clone, Default)]
pub struct GetScorecardQuery {
    pub filter: RiskFilter,
}

pub type GetScorecardResult = ScorecardView;

pub struct GetScorecardHandler {
    store: Arc<dyn SessionStore>,
}

impl GetScorecardHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetScorecardQuery) -> Result<GetScorecardResult, SessionError> {
        let active = self
            .store
            .active_analysis()
            .await
            .ok_or(SessionError::NoActiveAnalysis)?;
        Ok(ScorecardView::build(
            &active.contract_name,
            active.analyzed_at,
            &active.analysis,
            query.filter,
        ))
    }
}
