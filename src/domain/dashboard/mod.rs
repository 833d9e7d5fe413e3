pub mod overview;

pub use overview::{ActivityPoint, DashboardOverview, RecentAudit, RiskShare, RECENT_AUDIT_LIMIT};
