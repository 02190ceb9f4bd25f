//! Core projection engine running accumulation, decumulation, and assessment
//! as a fixed pipeline

use log::debug;

use crate::assumptions::RiskThresholds;
use crate::input::{ProjectionInput, ValidationError};

use super::accumulation::{ending_balance, simulate_accumulation};
use super::assessment::assess;
use super::decumulation::{simulate_decumulation, BenefitIndexation};
use super::trajectory::ProjectionResult;

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    /// Withdrawal-rate thresholds for the risk classification
    pub thresholds: RiskThresholds,

    /// Indexation policy for guaranteed benefits
    pub benefit_indexation: BenefitIndexation,
}

/// Main projection engine
///
/// A pure function from input snapshot to result: no retained state, no
/// I/O, identical output for identical input. Cheap enough to re-run on
/// every wizard keystroke; callers that want to skip redundant runs can
/// memoize on the full input.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create an engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run the full projection pipeline for one scenario.
    ///
    /// Structural errors fail fast before any simulation work; negative
    /// financial values are clamped rather than rejected.
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult, ValidationError> {
        input.validate()?;
        let input = input.sanitized();

        let accumulation = simulate_accumulation(
            input.current_age,
            input.retirement_age,
            input.current_savings,
            input.annual_contribution,
            input.pre_retirement_return,
            input.current_income,
            input.income_growth_rate,
        );

        let total_savings_at_retirement = ending_balance(&accumulation, input.current_savings);
        let final_working_income = accumulation
            .last()
            .map(|year| year.income)
            .unwrap_or(input.current_income);
        let required_annual_income =
            final_working_income * input.income_replacement_ratio.value();

        debug!(
            "accumulated {:.2} over {} years, first-year requirement {:.2}",
            total_savings_at_retirement,
            accumulation.len(),
            required_annual_income
        );

        let decumulation = simulate_decumulation(
            input.retirement_age,
            input.years_in_retirement,
            total_savings_at_retirement,
            required_annual_income,
            input.inflation_rate,
            input.guaranteed_monthly_benefit(),
            input.retirement_return,
            self.config.benefit_indexation,
        );

        let assessment = assess(
            &decumulation.years,
            decumulation.depletion_age,
            input.retirement_age,
            input.years_in_retirement,
            &self.config.thresholds,
        );

        debug!(
            "assessment: {} at average withdrawal rate {:.4}",
            assessment.risk_level.as_str(),
            assessment.average_withdrawal_rate
        );

        Ok(ProjectionResult {
            accumulation_trajectory: accumulation,
            funds_last_through_retirement: decumulation.depletion_age.is_none(),
            depletion_age: decumulation.depletion_age,
            final_balance: decumulation.final_balance,
            decumulation_trajectory: decumulation.years,
            total_savings_at_retirement,
            required_annual_income,
            average_withdrawal_rate: assessment.average_withdrawal_rate,
            risk_level: assessment.risk_level,
        })
    }
}

/// Project one scenario with the default configuration.
///
/// The single entry point for every consumer: wizard previews, the
/// results display, and the report generator all call this rather than
/// carrying their own compounding logic.
pub fn project(input: &ProjectionInput) -> Result<ProjectionResult, ValidationError> {
    ProjectionEngine::default().project(input)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::assumptions::RiskLevel;
    use crate::input::{ContributionSpec, Ratio};

    use super::*;

    /// Flat-income scenario whose decumulation starts from exactly
    /// `savings` with a `required` first-year target.
    fn flat_scenario(savings: f64, required: f64) -> ProjectionInput {
        ProjectionInput::builder(55, 65, required / 0.7)
            .current_savings(savings)
            .income_replacement(Ratio::new(0.7))
            .income_growth_rate(Ratio::ZERO)
            .returns(Ratio::ZERO, Ratio::new(0.045))
            .inflation_rate(Ratio::new(0.025))
            .cpp_benefit(2_000.0)
            .oas_benefit(0.0)
            .years_in_retirement(25)
            .build()
    }

    #[test]
    fn test_fail_fast_on_invalid_age_range() {
        let mut input = flat_scenario(1_000_000.0, 60_000.0);
        input.retirement_age = input.current_age;

        assert!(matches!(
            project(&input),
            Err(ValidationError::InvalidAgeRange { .. })
        ));
    }

    #[test]
    fn test_fail_fast_on_invalid_horizon() {
        let mut input = flat_scenario(1_000_000.0, 60_000.0);
        input.years_in_retirement = 0;

        assert!(matches!(
            project(&input),
            Err(ValidationError::InvalidHorizon { .. })
        ));
    }

    #[test]
    fn test_required_income_derived_from_final_working_year() {
        let result = project(&flat_scenario(1_000_000.0, 60_000.0)).unwrap();

        // Flat income: the final working year earns the current income.
        assert_relative_eq!(result.required_annual_income, 60_000.0, max_relative = 1e-9);
        assert_relative_eq!(
            result.total_savings_at_retirement,
            1_000_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_safe_classification() {
        let input = ProjectionInput::builder(55, 65, 100_000.0)
            .current_savings(2_000_000.0)
            .income_replacement(Ratio::new(0.8))
            .income_growth_rate(Ratio::ZERO)
            .returns(Ratio::ZERO, Ratio::new(0.045))
            .inflation_rate(Ratio::new(0.025))
            .cpp_benefit(2_000.0)
            .oas_benefit(0.0)
            .years_in_retirement(25)
            .build();
        let result = project(&input).unwrap();

        assert_eq!(result.risk_level, RiskLevel::Safe);
        assert!(result.funds_last_through_retirement);
        assert_relative_eq!(result.average_withdrawal_rate, 0.0364, max_relative = 1e-2);
    }

    #[test]
    fn test_moderate_classification() {
        let result = project(&flat_scenario(1_200_000.0, 60_000.0)).unwrap();

        assert_eq!(result.risk_level, RiskLevel::Moderate);
        assert!(result.funds_last_through_retirement);
    }

    #[test]
    fn test_high_risk_by_rate_without_depletion() {
        // Funds survive the horizon but the average rate clears the 6%
        // bar: sustainable only on paper.
        let result = project(&flat_scenario(1_000_000.0, 60_000.0)).unwrap();

        assert_eq!(result.depletion_age, None);
        assert!(result.funds_last_through_retirement);
        assert_relative_eq!(result.final_balance, 620_528.43, max_relative = 1e-6);
        assert_relative_eq!(result.average_withdrawal_rate, 0.0636, max_relative = 1e-2);
        assert_eq!(result.risk_level, RiskLevel::HighRisk);
    }

    #[test]
    fn test_early_depletion_is_high_risk() {
        let result = project(&flat_scenario(300_000.0, 60_000.0)).unwrap();

        assert_eq!(result.depletion_age, Some(73));
        assert!(!result.funds_last_through_retirement);
        assert_eq!(result.final_balance, 0.0);
        assert_eq!(result.risk_level, RiskLevel::HighRisk);
        // Trajectory still spans the full horizon.
        assert_eq!(result.decumulation_trajectory.len(), 25);
    }

    #[test]
    fn test_depletion_flag_consistency() {
        for savings in [0.0, 100_000.0, 300_000.0, 700_000.0, 1_000_000.0, 3_000_000.0] {
            let result = project(&flat_scenario(savings, 60_000.0)).unwrap();
            assert_eq!(
                result.depletion_age.is_none(),
                result.funds_last_through_retirement,
                "savings {}",
                savings
            );
        }
    }

    #[test]
    fn test_full_pipeline_growth_scenario() {
        let input = ProjectionInput::builder(30, 65, 70_000.0)
            .current_savings(50_000.0)
            .contribution(ContributionSpec::AnnualAmount(6_000.0))
            .income_replacement(Ratio::new(0.7))
            .income_growth_rate(Ratio::new(0.02))
            .returns(Ratio::new(0.065), Ratio::new(0.045))
            .build();
        let result = project(&input).unwrap();

        assert_eq!(result.accumulation_trajectory.len(), 35);
        assert_eq!(result.accumulation_trajectory[0].age, 30);
        assert_eq!(result.accumulation_trajectory[34].age, 64);
        assert_relative_eq!(
            result.total_savings_at_retirement,
            1_197_320.88,
            max_relative = 1e-6
        );

        // Requirement: 70% of income after 34 years of 2% growth.
        let final_income = 70_000.0 * 1.02_f64.powi(34);
        assert_relative_eq!(result.final_working_income(), final_income, max_relative = 1e-9);
        assert_relative_eq!(
            result.required_annual_income,
            final_income * 0.7,
            max_relative = 1e-9
        );
        assert_eq!(result.decumulation_trajectory.len(), 25);
    }

    #[test]
    fn test_negative_currency_inputs_are_clamped_not_fatal() {
        let mut input = flat_scenario(1_000_000.0, 60_000.0);
        input.current_savings = -50_000.0;

        let result = project(&input).unwrap();
        assert_eq!(result.total_savings_at_retirement, 0.0);
        assert_eq!(result.depletion_age, Some(65));
    }

    #[test]
    fn test_determinism() {
        let input = flat_scenario(1_000_000.0, 60_000.0);
        let a = serde_json::to_string(&project(&input).unwrap()).unwrap();
        let b = serde_json::to_string(&project(&input).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_indexed_benefits_config() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            benefit_indexation: BenefitIndexation::InflationIndexed,
            ..Default::default()
        });
        let input = flat_scenario(1_000_000.0, 60_000.0);

        let indexed = engine.project(&input).unwrap();
        let fixed = project(&input).unwrap();
        assert!(indexed.final_balance > fixed.final_balance);
    }
}
