//! Report assembly: flat metrics list and month-by-month table
//!
//! The label ordering of the flat list and the column ordering of the
//! monthly table are the export contract; consumers depend on them.

use chrono::Local;
use serde::Serialize;

use crate::format::{format_currency, format_decimal, format_number, format_percentage};
use crate::inputs::GrowthInputs;
use crate::projection::ProjectionResult;

/// Title carried by every exported report
pub const REPORT_TITLE: &str = "SaaS Growth Projections";

/// One (label, formatted value) pair of the flat metrics list
#[derive(Debug, Clone, Serialize)]
pub struct MetricEntry {
    pub label: &'static str,
    pub value: String,
}

/// One row of the exported monthly table, rounded to whole units
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub label: String,
    pub active_users: i64,
    pub monthly_revenue: i64,
    pub churned_users: i64,
}

/// Assembled report: everything the export formats need
#[derive(Debug, Clone, Serialize)]
pub struct GrowthReport {
    pub title: String,
    pub generated_on: String,
    pub metrics: Vec<MetricEntry>,
    pub monthly: Vec<TableRow>,
}

impl GrowthReport {
    /// Assemble the full report from one resolved input record and its
    /// projection, stamped with today's date.
    pub fn assemble(inputs: &GrowthInputs, result: &ProjectionResult) -> Self {
        Self {
            title: REPORT_TITLE.to_string(),
            generated_on: Local::now().format("%Y-%m-%d").to_string(),
            metrics: flat_metrics(inputs, result),
            monthly: monthly_table(result),
        }
    }
}

/// Build the flat ordered metrics list.
///
/// Order is fixed: current metrics, revenue forecasts, unit economics, then
/// the raw rate and volume inputs.
pub fn flat_metrics(inputs: &GrowthInputs, result: &ProjectionResult) -> Vec<MetricEntry> {
    let summary = result.summary(inputs);

    let entry = |label: &'static str, value: String| MetricEntry { label, value };

    vec![
        entry(
            "Active Users (Current)",
            format_number(summary.current_active_users),
        ),
        entry(
            "Monthly Revenue (Current)",
            format_currency(summary.current_monthly_revenue),
        ),
        entry("LTV:CAC Ratio", format_decimal(summary.ltv_cac_ratio, 1)),
        entry(
            "Monthly Churn Impact",
            format_number(summary.monthly_churn_impact),
        ),
        entry("3-Month Revenue", format_currency(summary.revenue_3_month)),
        entry("6-Month Revenue", format_currency(summary.revenue_6_month)),
        entry(
            "12-Month Revenue",
            format_currency(summary.revenue_12_month),
        ),
        entry(
            "Customer Lifetime",
            format!("{} months", format_number(inputs.customer_lifetime)),
        ),
        entry("Customer Acquisition Cost", format_currency(inputs.cac)),
        entry("Customer Lifetime Value", format_currency(inputs.ltv)),
        entry(
            "Signups Per Month",
            format_number(summary.signups_per_month),
        ),
        entry("Monthly Visitors", format_number(inputs.monthly_visitors)),
        entry("Signup Rate", format_percentage(inputs.signup_rate)),
        entry("Activation Rate", format_percentage(inputs.activation_rate)),
        entry("Retention Rate", format_percentage(inputs.retention_rate)),
        entry("Churn Rate", format_percentage(inputs.churn_rate)),
        entry("Monthly Revenue per User", format_currency(inputs.mrr)),
    ]
}

/// Build the month-by-month table with values rounded to whole units
pub fn monthly_table(result: &ProjectionResult) -> Vec<TableRow> {
    result
        .rows()
        .iter()
        .map(|row| TableRow {
            label: row.label(),
            active_users: row.active_users.round() as i64,
            monthly_revenue: row.monthly_revenue.round() as i64,
            churned_users: row.churned_users.round() as i64,
        })
        .collect()
}
