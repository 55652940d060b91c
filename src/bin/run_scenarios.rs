//! Run projections for a batch of scenarios from a CSV assumption file
//!
//! Writes one summary row per scenario, with optional full per-scenario
//! report files

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use growth_system::{
    inputs::load_scenarios,
    projection::{ProjectionConfig, ProjectionEngine, DEFAULT_HORIZON_MONTHS},
    report::{write_csv_file, GrowthReport},
};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "run_scenarios",
    about = "Project a batch of growth scenarios from a CSV assumption file"
)]
struct Args {
    /// Path to the scenario CSV
    #[arg(long, default_value = "scenarios.csv")]
    scenarios: String,

    /// Months to project (at least 12, for the revenue forecasts)
    #[arg(long, default_value_t = DEFAULT_HORIZON_MONTHS)]
    months: u32,

    /// Output path for the scenario summary CSV
    #[arg(long, default_value = "scenario_summary.csv")]
    output: String,

    /// Also write a full report CSV per scenario
    #[arg(long)]
    reports: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.months < 12 {
        bail!("months must be at least 12: the 3/6/12-month forecasts read from the series");
    }

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.scenarios);

    let scenarios = load_scenarios(&args.scenarios).map_err(|e| anyhow!("{}", e))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let config = ProjectionConfig {
        horizon_months: args.months,
    };

    println!("Running projections...");
    let proj_start = Instant::now();

    // Scenarios are independent given their resolved inputs; project them in
    // parallel
    let results: Vec<_> = scenarios
        .par_iter()
        .map(|scenario| {
            let engine = ProjectionEngine::new(config.clone());
            let result = engine.project(&scenario.inputs);
            let summary = result.summary(&scenario.inputs);
            (scenario, result, summary)
        })
        .collect();

    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output))?;

    writeln!(
        file,
        "Scenario,ActiveUsers,MonthlyRevenue,LtvCacRatio,ChurnImpact,Revenue3M,Revenue6M,Revenue12M,UserGrowth3M,FinalActiveUsers"
    )?;

    for (scenario, result, summary) in &results {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            scenario.name,
            summary.current_active_users,
            summary.current_monthly_revenue,
            summary.ltv_cac_ratio,
            summary.monthly_churn_impact,
            summary.revenue_3_month,
            summary.revenue_6_month,
            summary.revenue_12_month,
            summary.user_growth_3_month_pct,
            result.active_users.last().copied().unwrap_or(0.0),
        )?;
    }

    println!("Summary written to {}", args.output);

    if args.reports {
        for (scenario, result, _) in &results {
            let report = GrowthReport::assemble(&scenario.inputs, result);
            let path = format!(
                "growth_report_{}.csv",
                scenario.name.to_lowercase().replace(' ', "_")
            );
            write_csv_file(&report, &path).map_err(|e| anyhow!("{}", e))?;
            log::info!("Wrote {}", path);
        }
        println!("Wrote {} scenario reports", results.len());
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
