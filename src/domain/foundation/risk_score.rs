//! Composite risk score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{RiskLevel, ValidationError};

/// Overall contract risk, 0 (benign) to 100 (extremely risky) inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(u8);

impl RiskScore {
    /// Lowest possible score.
    pub const MIN: Self = Self(0);

    /// Highest possible score.
    pub const MAX: Self = Self(100);

    /// Creates a new RiskScore, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a RiskScore from a number reported by the generation service.
    ///
    /// Fractions are rounded, values outside [0, 100] are clamped. Non-finite
    /// numbers are rejected.
    pub fn from_reported(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "compositeRiskScore",
                "score must be a finite number",
            ));
        }
        let clamped = value.round().clamp(0.0, 100.0);
        Ok(Self(clamped as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Display band: above 70 is High, above 40 is Medium, otherwise Low.
    pub fn band(&self) -> RiskLevel {
        match self.0 {
            71..=100 => RiskLevel::High,
            41..=70 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

impl Default for RiskScore {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}
