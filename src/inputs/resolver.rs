//! Ordered-pass resolution of the derived input fields
//!
//! Edits to a growth record cascade: retention drives churn, churn drives
//! customer lifetime, lifetime and MRR drive LTV. The rules run in a fixed
//! order on every edit so the update order is a visible, testable contract
//! rather than implicit change-detection.

use super::GrowthInputs;

/// The editable fields of a [`GrowthInputs`] record.
///
/// `ChurnRate` is included for completeness: churn is normally derived from
/// retention, but a direct churn edit is resolved too (and refreshes the
/// customer lifetime).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    MonthlyVisitors,
    SignupRate,
    ActivationRate,
    RetentionRate,
    ChurnRate,
    Mrr,
    Cac,
}

/// Apply one field edit and return a fully consistent record.
///
/// The derivation rules run in fixed order:
///
/// 1. A direct churn edit (not one induced by retention) with churn > 0
///    recomputes `customer_lifetime = round(1 / (churn / 100))`. At zero
///    churn the lifetime is left at its prior value.
/// 2. A retention edit recomputes `churn_rate = 100 - retention`, always,
///    including retention 0 and 100.
/// 3. If `mrr` or `customer_lifetime` changed during this pass,
///    `ltv = mrr * customer_lifetime`.
///
/// Pure transformation: the input record is not mutated.
pub fn apply_edit(base: &GrowthInputs, field: InputField, value: f64) -> GrowthInputs {
    let mut next = base.clone();

    match field {
        InputField::MonthlyVisitors => next.monthly_visitors = value,
        InputField::SignupRate => next.signup_rate = value,
        InputField::ActivationRate => next.activation_rate = value,
        InputField::RetentionRate => next.retention_rate = value,
        InputField::ChurnRate => next.churn_rate = value,
        InputField::Mrr => next.mrr = value,
        InputField::Cac => next.cac = value,
    }

    // Rule 1: direct churn edit refreshes lifetime, guarded at zero churn
    if field == InputField::ChurnRate && next.churn_rate > 0.0 {
        next.customer_lifetime = (1.0 / (next.churn_rate / 100.0)).round();
    }

    // Rule 2: retention is authoritative over churn
    if field == InputField::RetentionRate {
        next.churn_rate = 100.0 - next.retention_rate;
    }

    // Rule 3: ltv follows mrr and lifetime
    let lifetime_changed = next.customer_lifetime != base.customer_lifetime;
    if field == InputField::Mrr || lifetime_changed {
        next.ltv = next.mrr * next.customer_lifetime;
    }

    next
}
