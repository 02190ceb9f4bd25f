//! Load batch scenarios from CSV

use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::Reader;

use super::data::ProjectionInput;
use super::units::{Percentage, Ratio};
use crate::assumptions::PlanningDefaults;

/// Raw CSV row matching the scenario export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Label")]
    label: String,
    #[serde(rename = "CurrentAge")]
    current_age: u8,
    #[serde(rename = "RetirementAge")]
    retirement_age: u8,
    #[serde(rename = "YearsInRetirement")]
    years_in_retirement: Option<u32>,
    #[serde(rename = "AnnualIncome")]
    annual_income: f64,
    #[serde(rename = "CurrentSavings")]
    current_savings: f64,
    #[serde(rename = "AnnualContribution")]
    annual_contribution: f64,
    #[serde(rename = "ReplacementPct")]
    replacement_pct: Option<f64>,
    #[serde(rename = "CppMonthly")]
    cpp_monthly: Option<f64>,
    #[serde(rename = "OasMonthly")]
    oas_monthly: Option<f64>,
    #[serde(rename = "PensionMonthly")]
    pension_monthly: Option<f64>,
    #[serde(rename = "OtherMonthly")]
    other_monthly: Option<f64>,
    #[serde(rename = "PreRetReturn")]
    pre_ret_return: f64,
    #[serde(rename = "RetReturn")]
    ret_return: f64,
    #[serde(rename = "IncomeGrowth")]
    income_growth: Option<f64>,
    #[serde(rename = "Inflation")]
    inflation: Option<f64>,
}

impl CsvRow {
    fn to_input(&self) -> ProjectionInput {
        let defaults = PlanningDefaults::default();
        ProjectionInput {
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            years_in_retirement: self
                .years_in_retirement
                .unwrap_or(defaults.years_in_retirement),
            current_income: self.annual_income,
            current_savings: self.current_savings,
            annual_contribution: self.annual_contribution,
            income_replacement_ratio: Percentage::new(self.replacement_pct.unwrap_or(70.0))
                .to_ratio(),
            cpp_benefit: self.cpp_monthly.unwrap_or(defaults.cpp_benefit),
            oas_benefit: self.oas_monthly.unwrap_or(defaults.oas_benefit),
            company_pension: self.pension_monthly.unwrap_or(0.0),
            other_income: self.other_monthly.unwrap_or(0.0),
            pre_retirement_return: Ratio::new(self.pre_ret_return),
            retirement_return: Ratio::new(self.ret_return),
            income_growth_rate: self
                .income_growth
                .map(Ratio::new)
                .unwrap_or(defaults.income_growth_rate),
            inflation_rate: self
                .inflation
                .map(Ratio::new)
                .unwrap_or(defaults.inflation_rate),
        }
    }
}

/// Load scenarios with their labels from a CSV file.
pub fn load_scenarios(path: &Path) -> Result<Vec<(String, ProjectionInput)>, Box<dyn Error>> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (used by tests with in-memory CSV).
pub fn load_scenarios_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<(String, ProjectionInput)>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        let input = row.to_input();
        scenarios.push((row.label, input));
    }

    Ok(scenarios)
}
