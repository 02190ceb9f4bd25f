//! Retirement Planner CLI
//!
//! Runs a projection for one scenario and prints the year-by-year
//! trajectories, the summary verdict, and a full CSV export.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use retirement_planner::input::load_scenarios;
use retirement_planner::projection::{BenefitIndexation, ProjectionConfig, ProjectionEngine};
use retirement_planner::{ContributionSpec, ProjectionInput, Ratio, ReturnProfile};

#[derive(Debug, Parser)]
#[command(name = "retirement_planner", version, about = "Retirement readiness projection")]
struct Args {
    /// Scenario CSV file; runs a built-in demo scenario when omitted
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Label of the scenario to run (defaults to the first row)
    #[arg(long)]
    scenario: Option<String>,

    /// Output CSV path
    #[arg(long, default_value = "projection_output.csv")]
    output: PathBuf,

    /// Treat guaranteed benefits as inflation-indexed
    #[arg(long)]
    indexed_benefits: bool,

    /// Print the full result as JSON instead of tables
    #[arg(long)]
    json: bool,
}

/// Demo scenario used when no file is given.
fn demo_input() -> ProjectionInput {
    ProjectionInput::builder(30, 65, 70_000.0)
        .current_savings(50_000.0)
        .contribution(ContributionSpec::MonthlyAmount(500.0))
        .return_profile(ReturnProfile::Balanced)
        .income_growth_rate(Ratio::new(0.02))
        .build()
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let (label, input) = match &args.scenarios {
        Some(path) => {
            let scenarios = load_scenarios(path)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("loading scenarios from {}", path.display()))?;
            match &args.scenario {
                Some(wanted) => scenarios
                    .into_iter()
                    .find(|(label, _)| label == wanted)
                    .with_context(|| format!("no scenario labeled '{wanted}'"))?,
                None => match scenarios.into_iter().next() {
                    Some(first) => first,
                    None => bail!("scenario file {} is empty", path.display()),
                },
            }
        }
        None => ("demo".to_string(), demo_input()),
    };

    let config = ProjectionConfig {
        benefit_indexation: if args.indexed_benefits {
            BenefitIndexation::InflationIndexed
        } else {
            BenefitIndexation::FixedNominal
        },
        ..Default::default()
    };
    let engine = ProjectionEngine::new(config);
    let result = engine.project(&input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Retirement Planner v0.1.0");
    println!("=========================\n");

    println!("Scenario: {}", label);
    println!("  Current Age: {}", input.current_age);
    println!("  Retirement Age: {}", input.retirement_age);
    println!("  Years In Retirement: {}", input.years_in_retirement);
    println!("  Annual Income: ${:.2}", input.current_income);
    println!("  Current Savings: ${:.2}", input.current_savings);
    println!("  Annual Contribution: ${:.2}", input.annual_contribution);
    println!(
        "  Guaranteed Benefits: ${:.2}/mo",
        input.guaranteed_monthly_benefit()
    );
    println!();

    // Accumulation table
    println!(
        "Accumulation ({} years):",
        result.accumulation_trajectory.len()
    );
    println!(
        "{:>4} {:>14} {:>14} {:>14} {:>14}",
        "Age", "Income", "Contribution", "Opening", "Closing"
    );
    println!("{}", "-".repeat(64));
    for year in result.accumulation_trajectory.iter().take(10) {
        println!(
            "{:>4} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            year.age, year.income, year.contribution, year.opening_balance, year.closing_balance
        );
    }
    if result.accumulation_trajectory.len() > 10 {
        println!(
            "... ({} more years)",
            result.accumulation_trajectory.len() - 10
        );
    }

    // Decumulation table
    println!(
        "\nDecumulation ({} years):",
        result.decumulation_trajectory.len()
    );
    println!(
        "{:>4} {:>12} {:>12} {:>12} {:>8} {:>14} {:>14}",
        "Age", "Required", "Guaranteed", "Withdrawal", "Rate", "Opening", "Closing"
    );
    println!("{}", "-".repeat(82));
    for year in result.decumulation_trajectory.iter().take(10) {
        println!(
            "{:>4} {:>12.2} {:>12.2} {:>12.2} {:>8.4} {:>14.2} {:>14.2}",
            year.age,
            year.required_annual_income,
            year.guaranteed_benefit_income,
            year.annual_withdrawal,
            year.withdrawal_rate,
            year.opening_balance,
            year.closing_balance
        );
    }
    if result.decumulation_trajectory.len() > 10 {
        println!(
            "... ({} more years)",
            result.decumulation_trajectory.len() - 10
        );
    }

    write_csv(&args.output, &label, &result)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("\nFull results written to: {}", args.output.display());

    // Summary
    println!("\nSummary:");
    println!(
        "  Savings At Retirement: ${:.2}",
        result.total_savings_at_retirement
    );
    println!(
        "  Required Annual Income: ${:.2}",
        result.required_annual_income
    );
    println!(
        "  Average Withdrawal Rate: {:.2}%",
        result.average_withdrawal_rate * 100.0
    );
    println!(
        "  Risk Level: {} ({})",
        result.risk_level.as_str(),
        result.risk_level.indicator_color()
    );
    println!("  {}", result.status_message());

    Ok(())
}

fn write_csv(
    path: &PathBuf,
    label: &str,
    result: &retirement_planner::ProjectionResult,
) -> Result<()> {
    let mut file = File::create(path)?;

    writeln!(
        file,
        "# scenario: {} | generated: {}",
        label,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(
        file,
        "Phase,Age,Income,Contribution,Required,Guaranteed,Withdrawal,WithdrawalRate,Opening,Closing"
    )?;

    for year in &result.accumulation_trajectory {
        writeln!(
            file,
            "accumulation,{},{:.2},{:.2},,,,,{:.2},{:.2}",
            year.age, year.income, year.contribution, year.opening_balance, year.closing_balance
        )?;
    }
    for year in &result.decumulation_trajectory {
        writeln!(
            file,
            "decumulation,{},,,{:.2},{:.2},{:.2},{:.6},{:.2},{:.2}",
            year.age,
            year.required_annual_income,
            year.guaranteed_benefit_income,
            year.annual_withdrawal,
            year.withdrawal_rate,
            year.opening_balance,
            year.closing_balance
        )?;
    }

    Ok(())
}
