//! Scenario input model
//!
//! A `ProjectionInput` is an immutable snapshot of one retirement
//! scenario, fully populated before the engine runs. The wizard owns the
//! mutable form state; it builds a fresh snapshot per projection via
//! `ProjectionInput::builder`, which applies the default table and
//! performs all unit normalization in one place.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::units::{Percentage, Ratio};
use crate::assumptions::{PlanningDefaults, ReturnProfile};

/// Structural input errors. Raised before any simulation work begins;
/// no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("retirement age {retirement_age} must be greater than current age {current_age}")]
    InvalidAgeRange { current_age: u8, retirement_age: u8 },

    #[error("years in retirement must be at least 1")]
    InvalidHorizon { years_in_retirement: u32 },
}

/// How the caller expresses the recurring contribution.
///
/// Resolved to one canonical annual amount when the input is built;
/// the simulators never see this enum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ContributionSpec {
    /// Fixed annual amount
    AnnualAmount(f64),
    /// Fixed monthly amount, annualized as 12 equal payments
    MonthlyAmount(f64),
    /// Fraction of current annual income
    RateOfIncome(Ratio),
}

impl ContributionSpec {
    /// Resolve to the canonical annual contribution amount.
    ///
    /// A rate is applied to current income once, here; the resulting
    /// amount stays constant in nominal terms for the whole trajectory.
    pub fn resolve(self, current_income: f64) -> f64 {
        match self {
            ContributionSpec::AnnualAmount(amount) => amount,
            ContributionSpec::MonthlyAmount(amount) => amount * 12.0,
            ContributionSpec::RateOfIncome(rate) => rate.value() * current_income,
        }
    }
}

/// One fully-specified retirement scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    /// Current age in years
    pub current_age: u8,

    /// Planned retirement age in years
    pub retirement_age: u8,

    /// Decumulation horizon in years
    pub years_in_retirement: u32,

    /// Current annual income
    pub current_income: f64,

    /// Total starting balance across all savings vehicles
    pub current_savings: f64,

    /// Canonical annual contribution amount (constant nominal)
    pub annual_contribution: f64,

    /// Target retirement income as a fraction of final working income
    pub income_replacement_ratio: Ratio,

    /// Monthly CPP benefit
    pub cpp_benefit: f64,

    /// Monthly OAS benefit
    pub oas_benefit: f64,

    /// Monthly employer pension
    pub company_pension: f64,

    /// Other monthly passive income
    pub other_income: f64,

    /// Annual return during accumulation
    pub pre_retirement_return: Ratio,

    /// Annual return during decumulation
    pub retirement_return: Ratio,

    /// Annual growth applied to working income
    pub income_growth_rate: Ratio,

    /// Annual inflation applied to the retirement income target
    pub inflation_rate: Ratio,
}

impl ProjectionInput {
    /// Start building a scenario from the mandatory fields, with every
    /// optional field taken from the default table.
    pub fn builder(current_age: u8, retirement_age: u8, current_income: f64) -> InputBuilder {
        InputBuilder::new(current_age, retirement_age, current_income)
    }

    /// Combined guaranteed monthly benefit across all sources.
    pub fn guaranteed_monthly_benefit(&self) -> f64 {
        self.cpp_benefit + self.oas_benefit + self.company_pension + self.other_income
    }

    /// Check structural invariants. Fails fast; value errors are handled
    /// by `sanitized` instead.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.retirement_age <= self.current_age {
            return Err(ValidationError::InvalidAgeRange {
                current_age: self.current_age,
                retirement_age: self.retirement_age,
            });
        }
        if self.years_in_retirement == 0 {
            return Err(ValidationError::InvalidHorizon {
                years_in_retirement: self.years_in_retirement,
            });
        }
        Ok(())
    }

    /// Copy with out-of-domain values normalized: negative currency
    /// amounts clamp to zero (almost always a formatting glitch upstream,
    /// not intent) and the replacement ratio clamps to [0, 2]. Return,
    /// growth, and inflation rates pass through untouched; negative
    /// rates are valid, extreme inputs.
    pub fn sanitized(&self) -> ProjectionInput {
        ProjectionInput {
            current_income: self.current_income.max(0.0),
            current_savings: self.current_savings.max(0.0),
            annual_contribution: self.annual_contribution.max(0.0),
            income_replacement_ratio: self.income_replacement_ratio.clamped(0.0, 2.0),
            cpp_benefit: self.cpp_benefit.max(0.0),
            oas_benefit: self.oas_benefit.max(0.0),
            company_pension: self.company_pension.max(0.0),
            other_income: self.other_income.max(0.0),
            ..self.clone()
        }
    }
}

/// Builder applying the default table and performing all unit
/// normalization at one boundary.
#[derive(Debug, Clone)]
pub struct InputBuilder {
    input: ProjectionInput,
    contribution: Option<ContributionSpec>,
}

impl InputBuilder {
    fn new(current_age: u8, retirement_age: u8, current_income: f64) -> Self {
        let defaults = PlanningDefaults::default();
        Self {
            input: ProjectionInput {
                current_age,
                retirement_age,
                years_in_retirement: defaults.years_in_retirement,
                current_income,
                current_savings: 0.0,
                annual_contribution: 0.0,
                income_replacement_ratio: Percentage::new(70.0).to_ratio(),
                cpp_benefit: defaults.cpp_benefit,
                oas_benefit: defaults.oas_benefit,
                company_pension: 0.0,
                other_income: 0.0,
                pre_retirement_return: ReturnProfile::Balanced.pre_retirement_return(),
                retirement_return: ReturnProfile::Balanced.retirement_return(),
                income_growth_rate: defaults.income_growth_rate,
                inflation_rate: defaults.inflation_rate,
            },
            contribution: None,
        }
    }

    /// Override the defaults this builder starts from.
    pub fn with_defaults(mut self, defaults: &PlanningDefaults) -> Self {
        self.input.years_in_retirement = defaults.years_in_retirement;
        self.input.cpp_benefit = defaults.cpp_benefit;
        self.input.oas_benefit = defaults.oas_benefit;
        self.input.income_growth_rate = defaults.income_growth_rate;
        self.input.inflation_rate = defaults.inflation_rate;
        self
    }

    pub fn current_savings(mut self, amount: f64) -> Self {
        self.input.current_savings = amount;
        self
    }

    pub fn contribution(mut self, spec: ContributionSpec) -> Self {
        self.contribution = Some(spec);
        self
    }

    pub fn years_in_retirement(mut self, years: u32) -> Self {
        self.input.years_in_retirement = years;
        self
    }

    /// Replacement target in ratio form (0.7 = 70%).
    pub fn income_replacement(mut self, ratio: Ratio) -> Self {
        self.input.income_replacement_ratio = ratio;
        self
    }

    /// Replacement target in percentage form (70 = 70%). Converted here,
    /// at the boundary, and nowhere else.
    pub fn income_replacement_percent(self, percent: Percentage) -> Self {
        self.income_replacement(percent.to_ratio())
    }

    pub fn cpp_benefit(mut self, monthly: f64) -> Self {
        self.input.cpp_benefit = monthly;
        self
    }

    pub fn oas_benefit(mut self, monthly: f64) -> Self {
        self.input.oas_benefit = monthly;
        self
    }

    pub fn company_pension(mut self, monthly: f64) -> Self {
        self.input.company_pension = monthly;
        self
    }

    pub fn other_income(mut self, monthly: f64) -> Self {
        self.input.other_income = monthly;
        self
    }

    /// Set both phase returns from a wizard preset.
    pub fn return_profile(mut self, profile: ReturnProfile) -> Self {
        self.input.pre_retirement_return = profile.pre_retirement_return();
        self.input.retirement_return = profile.retirement_return();
        self
    }

    pub fn returns(mut self, pre_retirement: Ratio, retirement: Ratio) -> Self {
        self.input.pre_retirement_return = pre_retirement;
        self.input.retirement_return = retirement;
        self
    }

    pub fn income_growth_rate(mut self, rate: Ratio) -> Self {
        self.input.income_growth_rate = rate;
        self
    }

    pub fn inflation_rate(mut self, rate: Ratio) -> Self {
        self.input.inflation_rate = rate;
        self
    }

    /// Finalize the snapshot, resolving the contribution spec to the
    /// canonical annual amount.
    pub fn build(mut self) -> ProjectionInput {
        if let Some(spec) = self.contribution {
            self.input.annual_contribution = spec.resolve(self.input.current_income);
        }
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> ProjectionInput {
        ProjectionInput::builder(30, 65, 70_000.0)
            .current_savings(50_000.0)
            .contribution(ContributionSpec::AnnualAmount(6_000.0))
            .build()
    }

    #[test]
    fn test_builder_applies_default_table() {
        let input = base_input();
        assert_eq!(input.years_in_retirement, 25);
        assert_eq!(input.cpp_benefit, 1433.00);
        assert_eq!(input.oas_benefit, 727.67);
        assert_eq!(input.inflation_rate, Ratio::new(0.025));
        assert_eq!(input.income_growth_rate, Ratio::new(0.021));
        assert_eq!(input.income_replacement_ratio, Ratio::new(0.7));
    }

    #[test]
    fn test_contribution_resolution() {
        assert_eq!(
            ContributionSpec::AnnualAmount(6_000.0).resolve(70_000.0),
            6_000.0
        );
        assert_eq!(
            ContributionSpec::MonthlyAmount(500.0).resolve(70_000.0),
            6_000.0
        );
        assert_eq!(
            ContributionSpec::RateOfIncome(Ratio::new(0.10)).resolve(70_000.0),
            7_000.0
        );
    }

    #[test]
    fn test_replacement_percent_normalized_once() {
        let input = ProjectionInput::builder(30, 65, 70_000.0)
            .income_replacement_percent(Percentage::new(80.0))
            .build();
        assert_eq!(input.income_replacement_ratio, Ratio::new(0.8));
    }

    #[test]
    fn test_validate_age_range() {
        let mut input = base_input();
        input.retirement_age = 30;
        assert_eq!(
            input.validate(),
            Err(ValidationError::InvalidAgeRange {
                current_age: 30,
                retirement_age: 30,
            })
        );
        input.retirement_age = 29;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_validate_horizon() {
        let mut input = base_input();
        input.years_in_retirement = 0;
        assert_eq!(
            input.validate(),
            Err(ValidationError::InvalidHorizon {
                years_in_retirement: 0,
            })
        );
    }

    #[test]
    fn test_sanitize_clamps_currency_not_rates() {
        let mut input = base_input();
        input.current_savings = -5_000.0;
        input.cpp_benefit = -100.0;
        input.pre_retirement_return = Ratio::new(-0.10);
        input.income_replacement_ratio = Ratio::new(3.0);

        let clean = input.sanitized();
        assert_eq!(clean.current_savings, 0.0);
        assert_eq!(clean.cpp_benefit, 0.0);
        assert_eq!(clean.income_replacement_ratio, Ratio::new(2.0));
        // Negative returns are valid inputs, not glitches.
        assert_eq!(clean.pre_retirement_return, Ratio::new(-0.10));
    }

    #[test]
    fn test_guaranteed_monthly_benefit_combines_sources() {
        let input = ProjectionInput::builder(30, 65, 70_000.0)
            .cpp_benefit(1_000.0)
            .oas_benefit(500.0)
            .company_pension(250.0)
            .other_income(250.0)
            .build();
        assert_eq!(input.guaranteed_monthly_benefit(), 2_000.0);
    }

    #[test]
    fn test_serde_round_trip_camel_case() {
        let input = base_input();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"currentAge\":30"));
        assert!(json.contains("\"incomeReplacementRatio\":0.7"));
        let back: ProjectionInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }
}
