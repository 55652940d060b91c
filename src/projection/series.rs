//! Projection output structures and derived summary metrics

use serde::{Deserialize, Serialize};

use crate::inputs::GrowthInputs;
use super::engine::ltv_cac_ratio;
use super::growth::{cumulative_cac, cumulative_revenue, growth_rate};

/// Month index of the 3-month revenue forecast (3rd month)
const FORECAST_3_MONTH: usize = 2;
/// Month index of the 6-month revenue forecast (6th month)
const FORECAST_6_MONTH: usize = 5;
/// Month index of the 12-month revenue forecast (12th month)
const FORECAST_12_MONTH: usize = 11;

/// A single month of projection output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRow {
    /// Projection month (1-indexed)
    pub month: u32,
    pub active_users: f64,
    pub monthly_revenue: f64,
    pub churned_users: f64,
}

impl MonthlyRow {
    /// Display label for the month: `M1`, `M2`, ...
    pub fn label(&self) -> String {
        format!("M{}", self.month)
    }
}

/// Complete projection result: the three monthly series
///
/// All series share the horizon length and are indexed by month offset
/// 0..horizon-1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub active_users: Vec<f64>,
    pub monthly_revenue: Vec<f64>,
    pub churned_users: Vec<f64>,
}

impl ProjectionResult {
    /// Number of projected months
    pub fn horizon_months(&self) -> usize {
        self.active_users.len()
    }

    /// The series zipped into month-by-month rows (1-indexed months)
    pub fn rows(&self) -> Vec<MonthlyRow> {
        (0..self.horizon_months())
            .map(|i| MonthlyRow {
                month: (i + 1) as u32,
                active_users: self.active_users[i],
                monthly_revenue: self.monthly_revenue[i],
                churned_users: self.churned_users[i],
            })
            .collect()
    }

    /// Running sum of monthly revenue through each month
    pub fn cumulative_revenue(&self) -> Vec<f64> {
        cumulative_revenue(&self.monthly_revenue)
    }

    /// Acquisition spend-to-date through each month: `users[i] * cac`
    pub fn cumulative_cac(&self, cac: f64) -> Vec<f64> {
        cumulative_cac(&self.active_users, cac)
    }

    /// Revenue forecast at a month offset, if within the horizon
    pub fn revenue_at(&self, month_index: usize) -> Option<f64> {
        self.monthly_revenue.get(month_index).copied()
    }

    /// Derived summary metrics for this projection.
    ///
    /// Reads the 3/6/12-month point forecasts directly from the revenue
    /// series, so the horizon must be at least 12 months (entry points
    /// enforce this before the engine runs).
    pub fn summary(&self, inputs: &GrowthInputs) -> GrowthSummary {
        let revenue_3_month = self.monthly_revenue[FORECAST_3_MONTH];
        let revenue_6_month = self.monthly_revenue[FORECAST_6_MONTH];
        let revenue_12_month = self.monthly_revenue[FORECAST_12_MONTH];

        GrowthSummary {
            current_active_users: self.active_users[0],
            current_monthly_revenue: self.monthly_revenue[0],
            ltv_cac_ratio: ltv_cac_ratio(inputs.ltv, inputs.cac),
            monthly_churn_impact: self.churned_users[0],
            signups_per_month: inputs.signups_per_month(),
            revenue_3_month,
            revenue_6_month,
            revenue_12_month,
            user_growth_3_month_pct: growth_rate(
                self.active_users[FORECAST_3_MONTH],
                self.active_users[0],
            ),
            revenue_growth_3_month_pct: growth_rate(revenue_3_month, self.monthly_revenue[0]),
            revenue_growth_6_month_pct: growth_rate(revenue_6_month, revenue_3_month),
            revenue_growth_12_month_pct: growth_rate(revenue_12_month, revenue_6_month),
        }
    }
}

/// Point-in-time and period-over-period summary metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub current_active_users: f64,
    pub current_monthly_revenue: f64,
    pub ltv_cac_ratio: f64,
    pub monthly_churn_impact: f64,
    pub signups_per_month: f64,
    pub revenue_3_month: f64,
    pub revenue_6_month: f64,
    pub revenue_12_month: f64,
    pub user_growth_3_month_pct: f64,
    pub revenue_growth_3_month_pct: f64,
    pub revenue_growth_6_month_pct: f64,
    pub revenue_growth_12_month_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEngine;
    use approx::assert_relative_eq;

    fn reference_result() -> (GrowthInputs, ProjectionResult) {
        let inputs = GrowthInputs::default_assumptions();
        let result = ProjectionEngine::default().project(&inputs);
        (inputs, result)
    }

    #[test]
    fn test_rows_are_one_indexed_and_labelled() {
        let (_, result) = reference_result();
        let rows = result.rows();

        assert_eq!(rows.len(), 18);
        assert_eq!(rows[0].month, 1);
        assert_eq!(rows[0].label(), "M1");
        assert_eq!(rows[17].label(), "M18");
        assert_relative_eq!(rows[0].active_users, 180.0);
        assert_relative_eq!(rows[0].monthly_revenue, 9_000.0);
        assert_relative_eq!(rows[0].churned_users, 18.0);
    }

    #[test]
    fn test_summary_reference_values() {
        let (inputs, result) = reference_result();
        let summary = result.summary(&inputs);

        assert_relative_eq!(summary.current_active_users, 180.0);
        assert_relative_eq!(summary.current_monthly_revenue, 9_000.0);
        assert_relative_eq!(summary.ltv_cac_ratio, 2.5);
        assert_relative_eq!(summary.monthly_churn_impact, 18.0);
        assert_relative_eq!(summary.signups_per_month, 300.0);
        assert_relative_eq!(summary.revenue_3_month, 24_390.0, epsilon = 1e-9);
    }

    #[test]
    fn test_summary_growth_rates() {
        let (inputs, result) = reference_result();
        let summary = result.summary(&inputs);

        // users: 180 -> 487.8 over 3 months
        assert_relative_eq!(
            summary.user_growth_3_month_pct,
            (487.8 - 180.0) / 180.0 * 100.0,
            epsilon = 1e-9
        );
        // revenue growth matches user growth (revenue is users * constant mrr)
        assert_relative_eq!(
            summary.revenue_growth_3_month_pct,
            summary.user_growth_3_month_pct,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_cumulative_revenue_is_running_sum() {
        let (_, result) = reference_result();
        let cumulative = result.cumulative_revenue();

        assert_relative_eq!(cumulative[0], 9_000.0);
        assert_relative_eq!(cumulative[1], 9_000.0 + 17_100.0);
        assert_relative_eq!(cumulative[2], 9_000.0 + 17_100.0 + 24_390.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cumulative_cac_tracks_user_base() {
        let (inputs, result) = reference_result();
        let cumulative = result.cumulative_cac(inputs.cac);

        // Spend-to-date is proportional to the user base, not a running sum
        assert_relative_eq!(cumulative[0], 180.0 * 200.0);
        assert_relative_eq!(cumulative[2], 487.8 * 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_revenue_at_bounds() {
        let (_, result) = reference_result();

        assert!(result.revenue_at(17).is_some());
        assert!(result.revenue_at(18).is_none());
    }
}
