//! Sustainability assessment of a decumulation trajectory

use serde::{Deserialize, Serialize};

use crate::assumptions::{RiskLevel, RiskThresholds};

use super::trajectory::DecumulationYear;

/// Summary verdict produced from the projected trajectories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub risk_level: RiskLevel,
    pub average_withdrawal_rate: f64,
}

/// Mean withdrawal rate over years in which a withdrawal occurred.
///
/// Years after depletion carry zero withdrawal and are excluded, so a
/// depleted tail does not dilute the rate; a trajectory with no
/// withdrawals at all averages zero.
pub fn average_withdrawal_rate(trajectory: &[DecumulationYear]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0_u32;

    for year in trajectory {
        if year.annual_withdrawal > 0.0 {
            sum += year.withdrawal_rate;
            count += 1;
        }
    }

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Classify the plan's sustainability.
///
/// Thresholds apply to the average withdrawal rate. Running out of money
/// is never SAFE regardless of the rate, and depleting before half the
/// horizon is consumed is HIGH_RISK outright.
pub fn assess(
    trajectory: &[DecumulationYear],
    depletion_age: Option<u8>,
    retirement_age: u8,
    years_in_retirement: u32,
    thresholds: &RiskThresholds,
) -> Assessment {
    let average = average_withdrawal_rate(trajectory);
    let mut risk_level = thresholds.classify(average);

    if let Some(age) = depletion_age {
        risk_level = risk_level.at_least(RiskLevel::Moderate);

        let years_survived = age.saturating_sub(retirement_age) as f64;
        if years_survived < years_in_retirement as f64 / 2.0 {
            risk_level = RiskLevel::HighRisk;
        }
    }

    Assessment {
        risk_level,
        average_withdrawal_rate: average,
    }
}
