//! Growth input record matching the calculator assumption set

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures for a growth input record.
///
/// These are raised at the entry points (CLI, scenario loader, HTTP handler)
/// before any projection runs. The engine itself never validates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Monthly visitors must be greater than 0")]
    NonPositiveVisitors,

    #[error("Signup rate must be between 0 and 100%")]
    SignupRateOutOfRange,

    #[error("MRR must be greater than 0")]
    NonPositiveMrr,

    #[error("CAC must be greater than 0")]
    NonPositiveCac,
}

/// A single set of growth assumptions for one projection run.
///
/// The record is immutable per calculation: it is resolved once (derived
/// fields filled from the raw ones), passed by value into the engine, and
/// discarded. `churn_rate`, `customer_lifetime`, and `ltv` are derived and
/// are never the primary target of an edit; use
/// [`apply_edit`](crate::inputs::apply_edit) to change a field and keep the
/// derivations consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthInputs {
    /// Average unique visitors per month
    pub monthly_visitors: f64,

    /// Visitor-to-signup conversion, percent in (0, 100]
    pub signup_rate: f64,

    /// Signup-to-active conversion, percent in [0, 100]
    pub activation_rate: f64,

    /// Month-over-month user retention, percent in [0, 100]
    pub retention_rate: f64,

    /// Monthly churn, percent; always 100 - retention_rate
    pub churn_rate: f64,

    /// Average customer lifetime in whole months; round(1 / monthly churn)
    pub customer_lifetime: f64,

    /// Average monthly revenue per active user
    pub mrr: f64,

    /// Cost to acquire one customer
    pub cac: f64,

    /// Customer lifetime value; mrr * customer_lifetime
    pub ltv: f64,
}

impl GrowthInputs {
    /// Build a fully resolved record from the six raw assumptions.
    ///
    /// Runs the complete derivation chain: churn from retention, lifetime
    /// from churn (guarded at zero churn, where lifetime falls back to the
    /// projection horizon), ltv from mrr and lifetime.
    pub fn from_assumptions(
        monthly_visitors: f64,
        signup_rate: f64,
        activation_rate: f64,
        retention_rate: f64,
        mrr: f64,
        cac: f64,
    ) -> Self {
        let churn_rate = 100.0 - retention_rate;
        let customer_lifetime = if churn_rate > 0.0 {
            (1.0 / (churn_rate / 100.0)).round()
        } else {
            // Zero churn: lifetime is unbounded in the model. Use the
            // projection horizon as the resting value rather than dividing.
            crate::projection::DEFAULT_HORIZON_MONTHS as f64
        };
        let ltv = mrr * customer_lifetime;

        Self {
            monthly_visitors,
            signup_rate,
            activation_rate,
            retention_rate,
            churn_rate,
            customer_lifetime,
            mrr,
            cac,
            ltv,
        }
    }

    /// The reference assumption set: 10k visitors, 3% signup, 60% activation,
    /// 90% retention, $50 MRR, $200 CAC.
    pub fn default_assumptions() -> Self {
        Self::from_assumptions(10_000.0, 3.0, 60.0, 90.0, 50.0, 200.0)
    }

    /// Expected signups per month: visitors * signup_rate
    pub fn signups_per_month(&self) -> f64 {
        self.monthly_visitors * (self.signup_rate / 100.0)
    }

    /// Expected newly activated users per month: signups * activation_rate
    pub fn new_active_per_month(&self) -> f64 {
        self.signups_per_month() * (self.activation_rate / 100.0)
    }

    /// Reject records the engine must never see.
    ///
    /// Mirrors the form-level checks of the interactive front-end: positive
    /// visitors, signup rate in (0, 100], positive MRR, positive CAC.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.monthly_visitors <= 0.0 {
            return Err(InputError::NonPositiveVisitors);
        }
        if self.signup_rate <= 0.0 || self.signup_rate > 100.0 {
            return Err(InputError::SignupRateOutOfRange);
        }
        if self.mrr <= 0.0 {
            return Err(InputError::NonPositiveMrr);
        }
        if self.cac <= 0.0 {
            return Err(InputError::NonPositiveCac);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_assumptions_resolve() {
        let inputs = GrowthInputs::default_assumptions();

        assert_relative_eq!(inputs.churn_rate, 10.0);
        assert_relative_eq!(inputs.customer_lifetime, 10.0);
        assert_relative_eq!(inputs.ltv, 500.0);
        assert_relative_eq!(inputs.signups_per_month(), 300.0);
        assert_relative_eq!(inputs.new_active_per_month(), 180.0);
    }

    #[test]
    fn test_lifetime_rounds_to_whole_months() {
        // 3% churn -> 33.33 months -> 33
        let inputs = GrowthInputs::from_assumptions(5_000.0, 2.0, 50.0, 97.0, 80.0, 300.0);
        assert_relative_eq!(inputs.customer_lifetime, 33.0);
        assert_relative_eq!(inputs.ltv, 80.0 * 33.0);
    }

    #[test]
    fn test_zero_churn_guard() {
        let inputs = GrowthInputs::from_assumptions(5_000.0, 2.0, 50.0, 100.0, 80.0, 300.0);
        assert_relative_eq!(inputs.churn_rate, 0.0);
        // No division by zero; lifetime rests at the horizon
        assert!(inputs.customer_lifetime.is_finite());
    }

    #[test]
    fn test_validate_accepts_reference_inputs() {
        assert!(GrowthInputs::default_assumptions().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let good = GrowthInputs::default_assumptions();

        let mut bad = good.clone();
        bad.monthly_visitors = 0.0;
        assert_eq!(bad.validate(), Err(InputError::NonPositiveVisitors));

        let mut bad = good.clone();
        bad.signup_rate = 0.0;
        assert_eq!(bad.validate(), Err(InputError::SignupRateOutOfRange));

        let mut bad = good.clone();
        bad.signup_rate = 100.5;
        assert_eq!(bad.validate(), Err(InputError::SignupRateOutOfRange));

        let mut bad = good.clone();
        bad.mrr = -1.0;
        assert_eq!(bad.validate(), Err(InputError::NonPositiveMrr));

        let mut bad = good;
        bad.cac = 0.0;
        assert_eq!(bad.validate(), Err(InputError::NonPositiveCac));
    }
}
