//! Accumulation phase: balance growth over the working years

use crate::input::Ratio;

use super::trajectory::AccumulationYear;

/// Project the account balance from `current_age` up to (not including)
/// `retirement_age`, one record per working year.
///
/// Ordinary annuity convention: growth applies to the opening balance
/// only, the contribution is credited at year end. The contribution is a
/// constant nominal amount for the whole trajectory; income is projected
/// alongside for reference and the replacement-ratio calculation.
///
/// Equal ages produce an empty trajectory; `ProjectionEngine` rejects
/// that case up front, but the simulator itself tolerates it.
pub fn simulate_accumulation(
    current_age: u8,
    retirement_age: u8,
    current_savings: f64,
    annual_contribution: f64,
    pre_retirement_return: Ratio,
    starting_income: f64,
    income_growth_rate: Ratio,
) -> Vec<AccumulationYear> {
    let span = retirement_age.saturating_sub(current_age) as u32;
    let mut trajectory = Vec::with_capacity(span as usize);

    let growth = pre_retirement_return.growth_factor();
    let mut balance = current_savings;

    for year in 0..span {
        let age = current_age + year as u8;
        let income = starting_income * income_growth_rate.growth_factor().powi(year as i32);
        let opening_balance = balance;
        let closing_balance = opening_balance * growth + annual_contribution;

        trajectory.push(AccumulationYear {
            age,
            income,
            contribution: annual_contribution,
            opening_balance,
            closing_balance,
        });

        balance = closing_balance;
    }

    trajectory
}

/// Ending balance of an accumulation trajectory, falling back to the
/// starting savings when no working years were simulated.
pub fn ending_balance(trajectory: &[AccumulationYear], current_savings: f64) -> f64 {
    trajectory
        .last()
        .map(|year| year.closing_balance)
        .unwrap_or(current_savings)
}
