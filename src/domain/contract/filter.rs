//! Risk-level filter for the scorecard clause list.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{RiskLevel, ValidationError};

use super::Clause;

/// Clause filter: `All` is the identity, a level matches exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RiskFilter {
    #[default]
    All,
    Only(RiskLevel),
}

impl RiskFilter {
    /// Filter values in the order the scorecard offers them.
    pub const OPTIONS: [RiskFilter; 4] = [
        RiskFilter::All,
        RiskFilter::Only(RiskLevel::High),
        RiskFilter::Only(RiskLevel::Medium),
        RiskFilter::Only(RiskLevel::Low),
    ];

    /// Returns true if the clause passes this filter.
    pub fn matches(&self, clause: &Clause) -> bool {
        match self {
            RiskFilter::All => true,
            RiskFilter::Only(level) => clause.risk_level == *level,
        }
    }

    /// Applies the filter, preserving the original order.
    pub fn apply<'a>(&self, clauses: &'a [Clause]) -> Vec<&'a Clause> {
        clauses.iter().filter(|c| self.matches(c)).collect()
    }
}

impl fmt::Display for RiskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskFilter::All => f.write_str("All"),
            RiskFilter::Only(level) => write!(f, "{}", level),
        }
    }
}

impl FromStr for RiskFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(RiskFilter::All);
        }
        s.parse::<RiskLevel>()
            .map(RiskFilter::Only)
            .map_err(|_| {
                ValidationError::invalid_format(
                    "risk",
                    format!("expected All, Low, Medium or High, got '{}'", s),
                )
            })
    }
}

impl Serialize for RiskFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RiskFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
