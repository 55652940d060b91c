//! Core projection engine for monthly growth projections

use crate::inputs::GrowthInputs;
use super::series::ProjectionResult;

/// Default projection horizon in months
pub const DEFAULT_HORIZON_MONTHS: u32 = 18;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Number of months to project
    pub horizon_months: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

/// Main projection engine
///
/// Stateless across calls: each projection takes an immutable input snapshot
/// and returns fresh output. The engine performs no validation; records must
/// pass [`GrowthInputs::validate`] upstream.
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run the projection for a single input record
    pub fn project(&self, inputs: &GrowthInputs) -> ProjectionResult {
        let active_users = active_users_series(
            inputs.monthly_visitors,
            inputs.signup_rate,
            inputs.activation_rate,
            inputs.retention_rate,
            self.config.horizon_months,
        );
        let monthly_revenue = revenue_series(&active_users, inputs.mrr);
        let churned_users = churn_series(&active_users, inputs.churn_rate);

        ProjectionResult {
            active_users,
            monthly_revenue,
            churned_users,
        }
    }

    /// The configured projection horizon
    pub fn horizon_months(&self) -> u32 {
        self.config.horizon_months
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}

/// Project active users over the horizon via the retention recurrence.
///
/// Month 0 holds one month of newly activated users. Every later month
/// retains a fraction of the prior month and adds the same constant inflow:
///
/// `series[i] = series[i-1] * retention/100 + new_active`
///
/// The recurrence is evaluated literally (not its closed form) because the
/// intermediate values feed the revenue and churn series.
pub fn active_users_series(
    monthly_visitors: f64,
    signup_rate: f64,
    activation_rate: f64,
    retention_rate: f64,
    months: u32,
) -> Vec<f64> {
    let signups = monthly_visitors * (signup_rate / 100.0);
    let new_active = signups * (activation_rate / 100.0);

    let mut series = Vec::with_capacity(months as usize);
    if months == 0 {
        return series;
    }

    series.push(new_active);
    for i in 1..months as usize {
        let retained = series[i - 1] * (retention_rate / 100.0);
        series.push(retained + new_active);
    }

    series
}

/// Monthly recurring revenue: elementwise `users[i] * mrr`
pub fn revenue_series(active_users: &[f64], mrr: f64) -> Vec<f64> {
    active_users.iter().map(|users| users * mrr).collect()
}

/// Monthly churn volume (users lost): elementwise `users[i] * churn/100`
pub fn churn_series(active_users: &[f64], churn_rate: f64) -> Vec<f64> {
    active_users
        .iter()
        .map(|users| users * (churn_rate / 100.0))
        .collect()
}

/// LTV to CAC ratio: `ltv / cac`.
///
/// No zero-guard: callers guarantee cac > 0 (validated upstream).
pub fn ltv_cac_ratio(ltv: f64, cac: f64) -> f64 {
    ltv / cac
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_inputs() -> GrowthInputs {
        GrowthInputs::default_assumptions()
    }

    #[test]
    fn test_reference_recurrence_values() {
        let series = active_users_series(10_000.0, 3.0, 60.0, 90.0, 18);

        assert_relative_eq!(series[0], 180.0);
        assert_relative_eq!(series[1], 342.0);
        assert_relative_eq!(series[2], 487.8, epsilon = 1e-9);
    }

    #[test]
    fn test_series_length_matches_horizon() {
        for months in [0u32, 1, 12, 18, 36] {
            let series = active_users_series(10_000.0, 3.0, 60.0, 90.0, months);
            assert_eq!(series.len(), months as usize);
        }
    }

    #[test]
    fn test_series_non_negative() {
        let series = active_users_series(10_000.0, 3.0, 60.0, 90.0, 18);
        assert!(series.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_zero_retention_has_no_carry_over() {
        let series = active_users_series(10_000.0, 3.0, 60.0, 0.0, 18);
        for &v in &series {
            assert_relative_eq!(v, 180.0);
        }
    }

    #[test]
    fn test_partial_retention_increases_toward_steady_state() {
        let retention = 90.0;
        let series = active_users_series(10_000.0, 3.0, 60.0, retention, 18);

        let steady_state = 180.0 / (1.0 - retention / 100.0);
        for window in series.windows(2) {
            assert!(window[1] > window[0]);
        }
        assert!(series.iter().all(|&v| v < steady_state));
    }

    #[test]
    fn test_revenue_series_elementwise() {
        let users = vec![180.0, 342.0, 487.8];
        let revenue = revenue_series(&users, 50.0);

        assert_relative_eq!(revenue[0], 9_000.0);
        assert_relative_eq!(revenue[1], 17_100.0);
        assert_relative_eq!(revenue[2], 24_390.0, epsilon = 1e-9);
    }

    #[test]
    fn test_churn_series_elementwise() {
        let users = vec![180.0, 342.0];
        let churned = churn_series(&users, 10.0);

        assert_relative_eq!(churned[0], 18.0);
        assert_relative_eq!(churned[1], 34.2, epsilon = 1e-9);
    }

    #[test]
    fn test_ltv_cac_ratio_reference() {
        assert_relative_eq!(ltv_cac_ratio(500.0, 200.0), 2.5);
    }

    #[test]
    fn test_engine_produces_equal_length_series() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&reference_inputs());

        assert_eq!(result.active_users.len(), 18);
        assert_eq!(result.monthly_revenue.len(), 18);
        assert_eq!(result.churned_users.len(), 18);
    }

    #[test]
    fn test_engine_is_deterministic() {
        let engine = ProjectionEngine::default();
        let inputs = reference_inputs();

        let a = engine.project(&inputs);
        let b = engine.project(&inputs);
        assert_eq!(a.active_users, b.active_users);
        assert_eq!(a.monthly_revenue, b.monthly_revenue);
        assert_eq!(a.churned_users, b.churned_users);
    }

    #[test]
    fn test_engine_does_not_mutate_inputs() {
        let engine = ProjectionEngine::default();
        let inputs = reference_inputs();
        let snapshot = inputs.clone();

        let _ = engine.project(&inputs);
        assert_eq!(inputs, snapshot);
    }
}
