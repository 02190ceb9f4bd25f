//! AWS Lambda handler for running projections
//!
//! Accepts one scenario as JSON and returns the full projection result.
//! Every optional field falls back to the documented default table, so a
//! minimal request only needs ages and income.

use std::time::Instant;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

use retirement_planner::projection::{BenefitIndexation, ProjectionConfig, ProjectionEngine};
use retirement_planner::{
    Percentage, PlanningDefaults, ProjectionInput, ProjectionResult, Ratio,
};

fn default_years_in_retirement() -> u32 {
    PlanningDefaults::default().years_in_retirement
}

fn default_cpp_benefit() -> f64 {
    PlanningDefaults::default().cpp_benefit
}

fn default_oas_benefit() -> f64 {
    PlanningDefaults::default().oas_benefit
}

fn default_replacement_pct() -> f64 {
    70.0
}

fn default_pre_retirement_return() -> f64 {
    0.065
}

fn default_retirement_return() -> f64 {
    0.045
}

fn default_income_growth_rate() -> f64 {
    PlanningDefaults::default().income_growth_rate.value()
}

fn default_inflation_rate() -> f64 {
    PlanningDefaults::default().inflation_rate.value()
}

/// Input scenario for the projection
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    pub current_age: u8,

    pub retirement_age: u8,

    pub current_income: f64,

    #[serde(default = "default_years_in_retirement")]
    pub years_in_retirement: u32,

    #[serde(default)]
    pub current_savings: f64,

    /// Annual contribution amount (ignored when a monthly amount is given)
    #[serde(default)]
    pub annual_contribution: f64,

    /// Monthly contribution amount, annualized as 12 payments
    #[serde(default)]
    pub monthly_contribution: Option<f64>,

    /// Replacement target as a percentage (70 = 70%)
    #[serde(default = "default_replacement_pct")]
    pub income_replacement_pct: f64,

    #[serde(default = "default_cpp_benefit")]
    pub cpp_benefit: f64,

    #[serde(default = "default_oas_benefit")]
    pub oas_benefit: f64,

    #[serde(default)]
    pub company_pension: f64,

    #[serde(default)]
    pub other_income: f64,

    #[serde(default = "default_pre_retirement_return")]
    pub pre_retirement_return: f64,

    #[serde(default = "default_retirement_return")]
    pub retirement_return: f64,

    #[serde(default = "default_income_growth_rate")]
    pub income_growth_rate: f64,

    #[serde(default = "default_inflation_rate")]
    pub inflation_rate: f64,

    /// Treat guaranteed benefits as inflation-indexed
    #[serde(default)]
    pub indexed_benefits: bool,
}

impl ProjectionRequest {
    fn to_input(&self) -> ProjectionInput {
        let annual_contribution = match self.monthly_contribution {
            Some(monthly) => monthly * 12.0,
            None => self.annual_contribution,
        };

        ProjectionInput {
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            years_in_retirement: self.years_in_retirement,
            current_income: self.current_income,
            current_savings: self.current_savings,
            annual_contribution,
            income_replacement_ratio: Percentage::new(self.income_replacement_pct).to_ratio(),
            cpp_benefit: self.cpp_benefit,
            oas_benefit: self.oas_benefit,
            company_pension: self.company_pension,
            other_income: self.other_income,
            pre_retirement_return: Ratio::new(self.pre_retirement_return),
            retirement_return: Ratio::new(self.retirement_return),
            income_growth_rate: Ratio::new(self.income_growth_rate),
            inflation_rate: Ratio::new(self.inflation_rate),
        }
    }
}

/// Response with the full projection and timing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub result: ProjectionResult,
    pub status_message: String,
    pub execution_time_ms: u64,
}

async fn handler(event: LambdaEvent<ProjectionRequest>) -> Result<ProjectionResponse, Error> {
    let start = Instant::now();
    let request = event.payload;

    let config = ProjectionConfig {
        benefit_indexation: if request.indexed_benefits {
            BenefitIndexation::InflationIndexed
        } else {
            BenefitIndexation::FixedNominal
        },
        ..Default::default()
    };

    let engine = ProjectionEngine::new(config);
    let result = engine.project(&request.to_input())?;

    Ok(ProjectionResponse {
        status_message: result.status_message(),
        result,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
