//! Run projections for every scenario in a CSV file
//!
//! Outputs one summary row per scenario plus aggregate risk counts.

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;

use retirement_planner::input::load_scenarios;
use retirement_planner::{RiskLevel, ScenarioRunner};

fn main() -> Result<()> {
    env_logger::init();

    let scenario_path = env::args().nth(1).unwrap_or_else(|| "scenarios.csv".to_string());
    let output_path = env::args().nth(2).unwrap_or_else(|| "batch_output.csv".to_string());

    let start = Instant::now();
    println!("Loading scenarios from {}...", scenario_path);

    let scenarios = load_scenarios(Path::new(&scenario_path))
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("loading {}", scenario_path))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();

    let runner = ScenarioRunner::new();
    let results: Vec<_> = scenarios
        .par_iter()
        .map(|(label, input)| (label.clone(), runner.run(input)))
        .collect();

    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut file = File::create(&output_path)?;
    writeln!(
        file,
        "Label,SavingsAtRetirement,RequiredAnnualIncome,AvgWithdrawalRate,RiskLevel,DepletionAge,FinalBalance"
    )?;

    let mut safe = 0_u32;
    let mut moderate = 0_u32;
    let mut high_risk = 0_u32;
    let mut failed = 0_u32;

    for (label, result) in &results {
        match result {
            Ok(result) => {
                match result.risk_level {
                    RiskLevel::Safe => safe += 1,
                    RiskLevel::Moderate => moderate += 1,
                    RiskLevel::HighRisk => high_risk += 1,
                }
                writeln!(
                    file,
                    "{},{:.2},{:.2},{:.6},{},{},{:.2}",
                    label,
                    result.total_savings_at_retirement,
                    result.required_annual_income,
                    result.average_withdrawal_rate,
                    result.risk_level.as_str(),
                    result
                        .depletion_age
                        .map(|a| a.to_string())
                        .unwrap_or_default(),
                    result.final_balance,
                )?;
            }
            Err(err) => {
                failed += 1;
                eprintln!("scenario '{}' rejected: {}", label, err);
            }
        }
    }

    println!("\nSummary written to: {}", output_path);
    println!("  SAFE: {}", safe);
    println!("  MODERATE: {}", moderate);
    println!("  HIGH_RISK: {}", high_risk);
    if failed > 0 {
        println!("  rejected: {}", failed);
    }

    Ok(())
}
