//! Decumulation phase: withdrawals against an inflation-adjusted target

use serde::{Deserialize, Serialize};

use crate::input::Ratio;

use super::trajectory::DecumulationYear;

/// Indexation policy for guaranteed benefit income.
///
/// The income target always grows with inflation; whether the guaranteed
/// benefits keep pace is a modeling choice, so it is an explicit toggle
/// rather than a hidden assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BenefitIndexation {
    /// Benefits stay constant in nominal terms
    #[default]
    FixedNominal,
    /// Benefits grow at the same inflation rate as the income target
    InflationIndexed,
}

/// Outcome of the decumulation phase.
#[derive(Debug, Clone, PartialEq)]
pub struct DecumulationOutcome {
    /// One record per horizon year, even after depletion
    pub years: Vec<DecumulationYear>,

    /// Age at which the balance first hit zero with an unmet need
    pub depletion_age: Option<u8>,

    /// Closing balance of the final horizon year
    pub final_balance: f64,
}

/// Project withdrawals from `retirement_age` over `years_in_retirement`
/// years.
///
/// Each year needs `required_first_year_income` grown by inflation, net
/// of guaranteed benefits; the portfolio covers the rest. Balance
/// recurrence: `closing = opening * (1 + r) - withdrawal`, floored at
/// zero. The first year whose clamped closing balance reaches zero while
/// a positive withdrawal was needed sets the depletion age; later years
/// still emit records (zero balance, zero withdrawal, requirement still
/// reported) so the trajectory always spans the full horizon.
#[allow(clippy::too_many_arguments)]
pub fn simulate_decumulation(
    retirement_age: u8,
    years_in_retirement: u32,
    starting_balance: f64,
    required_first_year_income: f64,
    inflation_rate: Ratio,
    guaranteed_monthly_benefit: f64,
    retirement_return: Ratio,
    indexation: BenefitIndexation,
) -> DecumulationOutcome {
    let mut years = Vec::with_capacity(years_in_retirement as usize);
    let mut depletion_age = None;

    let growth = retirement_return.growth_factor();
    let inflation = inflation_rate.growth_factor();
    let first_year_benefit = guaranteed_monthly_benefit * 12.0;
    let mut balance = starting_balance;

    for year in 0..years_in_retirement {
        let age = retirement_age.saturating_add(year.min(u8::MAX as u32) as u8);
        let escalation = inflation.powi(year as i32);
        let required_annual_income = required_first_year_income * escalation;
        let guaranteed_benefit_income = match indexation {
            BenefitIndexation::FixedNominal => first_year_benefit,
            BenefitIndexation::InflationIndexed => first_year_benefit * escalation,
        };
        let need = (required_annual_income - guaranteed_benefit_income).max(0.0);

        let opening_balance = balance;
        let (annual_withdrawal, closing_balance) = if depletion_age.is_none() {
            let closing = opening_balance * growth - need;
            if closing <= 0.0 && need > 0.0 {
                depletion_age = Some(age);
            }
            (need, closing.max(0.0))
        } else {
            // Depleted: nothing left to withdraw, the requirement keeps
            // being reported as unmet need.
            (0.0, 0.0)
        };

        let withdrawal_rate = if opening_balance > 0.0 {
            annual_withdrawal / opening_balance
        } else {
            0.0
        };

        years.push(DecumulationYear {
            age,
            required_annual_income,
            guaranteed_benefit_income,
            annual_withdrawal,
            withdrawal_rate,
            opening_balance,
            closing_balance,
        });

        balance = closing_balance;
    }

    let final_balance = years.last().map(|y| y.closing_balance).unwrap_or(starting_balance);

    DecumulationOutcome {
        years,
        depletion_age,
        final_balance,
    }
}
