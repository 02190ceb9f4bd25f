//! Trajectory output structures for projections

use serde::{Deserialize, Serialize};

use crate::assumptions::RiskLevel;

/// One working year of the accumulation phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulationYear {
    /// Age during this year
    pub age: u8,

    /// Working income earned this year
    pub income: f64,

    /// Contribution credited at year end
    pub contribution: f64,

    /// Balance at the start of the year
    pub opening_balance: f64,

    /// Balance after growth and the year-end contribution
    pub closing_balance: f64,
}

/// One retirement year of the decumulation phase.
///
/// Records keep being produced after depletion (zero balances, zero
/// withdrawal) so downstream display always sees the full horizon, with
/// the inflated requirement showing the unmet need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecumulationYear {
    /// Age during this year
    pub age: u8,

    /// Inflation-adjusted income target for this year
    pub required_annual_income: f64,

    /// Annual guaranteed benefit income (CPP, OAS, pension, other)
    pub guaranteed_benefit_income: f64,

    /// Portfolio withdrawal needed on top of guaranteed income
    pub annual_withdrawal: f64,

    /// Withdrawal as a fraction of the opening balance; zero when the
    /// opening balance is zero
    pub withdrawal_rate: f64,

    /// Balance at the start of the year
    pub opening_balance: f64,

    /// Balance after growth and withdrawal, floored at zero
    pub closing_balance: f64,
}

/// Complete projection result: both trajectories plus the summary verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Year-by-year accumulation records, ages ascending
    pub accumulation_trajectory: Vec<AccumulationYear>,

    /// Year-by-year decumulation records, exactly the full horizon
    pub decumulation_trajectory: Vec<DecumulationYear>,

    /// Projected balance at retirement
    pub total_savings_at_retirement: f64,

    /// First-year retirement income target
    pub required_annual_income: f64,

    /// Mean withdrawal rate over years with a withdrawal
    pub average_withdrawal_rate: f64,

    /// Age at which funds run out; None when they last the horizon
    pub depletion_age: Option<u8>,

    /// Balance at the end of the modeled horizon
    pub final_balance: f64,

    /// True exactly when `depletion_age` is None
    pub funds_last_through_retirement: bool,

    /// Sustainability classification
    pub risk_level: RiskLevel,
}

impl ProjectionResult {
    /// Income earned in the final working year, or zero for an empty
    /// accumulation trajectory.
    pub fn final_working_income(&self) -> f64 {
        self.accumulation_trajectory
            .last()
            .map(|year| year.income)
            .unwrap_or(0.0)
    }

    /// One-line status summary for the results display.
    pub fn status_message(&self) -> String {
        match self.depletion_age {
            None => format!(
                "Funds last entire retirement with ${:.0} remaining",
                self.final_balance
            ),
            Some(age) => format!("Funds depleted at age {}", age),
        }
    }
}
