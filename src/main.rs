//! Growth System CLI
//!
//! Runs the reference growth projection and writes the exportable report

use growth_system::{
    projection::{ProjectionConfig, ProjectionEngine},
    report::{write_csv_file, GrowthReport},
    GrowthInputs,
};

fn main() {
    env_logger::init();

    println!("Growth System v0.1.0");
    println!("====================\n");

    let inputs = GrowthInputs::default_assumptions();
    if let Err(e) = inputs.validate() {
        eprintln!("Invalid inputs: {}", e);
        std::process::exit(1);
    }

    println!("Assumptions:");
    println!("  Monthly Visitors: {:.0}", inputs.monthly_visitors);
    println!("  Signup Rate: {:.1}%", inputs.signup_rate);
    println!("  Activation Rate: {:.1}%", inputs.activation_rate);
    println!("  Retention Rate: {:.1}%", inputs.retention_rate);
    println!("  Churn Rate: {:.1}%", inputs.churn_rate);
    println!("  Customer Lifetime: {:.0} months", inputs.customer_lifetime);
    println!("  MRR per User: ${:.2}", inputs.mrr);
    println!("  CAC: ${:.2}", inputs.cac);
    println!("  LTV: ${:.2}", inputs.ltv);
    println!();

    let engine = ProjectionEngine::new(ProjectionConfig::default());
    let result = engine.project(&inputs);

    // Print the monthly projection table
    println!("Projection Results ({} months):", result.horizon_months());
    println!(
        "{:>5} {:>14} {:>16} {:>14}",
        "Month", "Active Users", "Monthly Revenue", "Churned Users"
    );
    println!("{}", "-".repeat(53));

    for row in result.rows() {
        println!(
            "{:>5} {:>14.1} {:>16.2} {:>14.1}",
            row.label(),
            row.active_users,
            row.monthly_revenue,
            row.churned_users,
        );
    }

    // Write the full report to CSV
    let report = GrowthReport::assemble(&inputs, &result);
    let csv_path = "growth_projection.csv";
    if let Err(e) = write_csv_file(&report, csv_path) {
        eprintln!("Failed to write report: {}", e);
        std::process::exit(1);
    }
    println!("\nFull report written to: {}", csv_path);

    // Print summary
    let summary = result.summary(&inputs);
    println!("\nSummary:");
    println!("  Active Users (Current): {:.0}", summary.current_active_users);
    println!(
        "  Monthly Revenue (Current): ${:.2}",
        summary.current_monthly_revenue
    );
    println!("  LTV:CAC Ratio: {:.1}", summary.ltv_cac_ratio);
    println!("  Monthly Churn Impact: {:.0}", summary.monthly_churn_impact);
    println!("  Signups Per Month: {:.0}", summary.signups_per_month);
    println!("  3-Month Revenue: ${:.2}", summary.revenue_3_month);
    println!("  6-Month Revenue: ${:.2}", summary.revenue_6_month);
    println!("  12-Month Revenue: ${:.2}", summary.revenue_12_month);
    println!(
        "  3-Month User Growth: {:.1}%",
        summary.user_growth_3_month_pct
    );
    println!(
        "  3-Month Revenue Growth: {:.1}%",
        summary.revenue_growth_3_month_pct
    );
}
