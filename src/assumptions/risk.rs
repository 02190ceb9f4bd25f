//! Sustainability risk classification policy

use serde::{Deserialize, Serialize};

/// Sustainability verdict for a projected retirement plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Safe,
    Moderate,
    HighRisk,
}

impl RiskLevel {
    /// Display label matching the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::HighRisk => "HIGH_RISK",
        }
    }

    /// Traffic-light color used by the results display.
    pub fn indicator_color(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "green",
            RiskLevel::Moderate => "yellow",
            RiskLevel::HighRisk => "red",
        }
    }

    /// Escalate to at least `floor`.
    pub fn at_least(self, floor: RiskLevel) -> RiskLevel {
        if (floor as u8) > (self as u8) {
            floor
        } else {
            self
        }
    }
}

/// Withdrawal-rate thresholds for the risk classification.
///
/// Upper bounds are inclusive: an average rate of exactly `safe_max`
/// classifies as SAFE, exactly `moderate_max` as MODERATE.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Maximum average withdrawal rate considered SAFE
    pub safe_max: f64,

    /// Maximum average withdrawal rate considered MODERATE
    pub moderate_max: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            safe_max: 0.04,
            moderate_max: 0.06,
        }
    }
}

impl RiskThresholds {
    /// Classify an average withdrawal rate.
    pub fn classify(&self, average_withdrawal_rate: f64) -> RiskLevel {
        if average_withdrawal_rate <= self.safe_max {
            RiskLevel::Safe
        } else if average_withdrawal_rate <= self.moderate_max {
            RiskLevel::Moderate
        } else {
            RiskLevel::HighRisk
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values_belong_to_lower_class() {
        let t = RiskThresholds::default();
        assert_eq!(t.classify(0.04), RiskLevel::Safe);
        assert_eq!(t.classify(0.0401), RiskLevel::Moderate);
        assert_eq!(t.classify(0.06), RiskLevel::Moderate);
        assert_eq!(t.classify(0.0601), RiskLevel::HighRisk);
    }

    #[test]
    fn test_zero_rate_is_safe() {
        assert_eq!(RiskThresholds::default().classify(0.0), RiskLevel::Safe);
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = RiskThresholds {
            safe_max: 0.03,
            moderate_max: 0.05,
        };
        assert_eq!(strict.classify(0.035), RiskLevel::Moderate);
        assert_eq!(strict.classify(0.055), RiskLevel::HighRisk);
    }

    #[test]
    fn test_at_least_escalates_only_upward() {
        assert_eq!(
            RiskLevel::Safe.at_least(RiskLevel::Moderate),
            RiskLevel::Moderate
        );
        assert_eq!(
            RiskLevel::HighRisk.at_least(RiskLevel::Moderate),
            RiskLevel::HighRisk
        );
        assert_eq!(RiskLevel::Moderate.at_least(RiskLevel::Safe), RiskLevel::Moderate);
    }

    #[test]
    fn test_colors() {
        assert_eq!(RiskLevel::Safe.indicator_color(), "green");
        assert_eq!(RiskLevel::Moderate.indicator_color(), "yellow");
        assert_eq!(RiskLevel::HighRisk.indicator_color(), "red");
    }
}
