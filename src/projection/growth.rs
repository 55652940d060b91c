//! Period-over-period growth and cumulative metrics

/// Period-over-period growth rate in percent.
///
/// Returns 0 when `previous` is 0: a flat rate instead of an infinite or
/// NaN one. This zero-guard is part of the contract.
pub fn growth_rate(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous * 100.0
    }
}

/// Running sum of monthly revenue through each month
pub fn cumulative_revenue(monthly_revenue: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    monthly_revenue
        .iter()
        .map(|revenue| {
            total += revenue;
            total
        })
        .collect()
}

/// Acquisition spend-to-date through each month.
///
/// Modeled as `users[i] * cac`: total spend proportional to the user base at
/// month `i`, not a running sum of per-period spend. This approximation is
/// part of the contract and must not be replaced with a true cumulative sum.
pub fn cumulative_cac(active_users: &[f64], cac: f64) -> Vec<f64> {
    active_users.iter().map(|users| users * cac).collect()
}
