use crate::calc::round_to;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanSummary {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    /// Number of monthly payments (years * 12)
    pub payments: f64,
}

/// Fixed-rate amortized loan. `annual_rate` is a percentage.
///
/// A zero rate has no amortization formula and is reported as no result,
/// as is any non-positive principal or term.
pub fn loan(
    principal: Option<f64>,
    annual_rate: Option<f64>,
    years: Option<f64>,
) -> Option<LoanSummary> {
    let principal = principal.filter(|p| *p > 0.0)?;
    let rate = annual_rate.filter(|r| *r > 0.0)? / 100.0 / 12.0;
    let payments = years.filter(|y| *y > 0.0)? * 12.0;

    let growth = (1.0 + rate).powf(payments);
    let monthly = principal * rate * growth / (growth - 1.0);
    if !monthly.is_finite() {
        return None;
    }

    let total = monthly * payments;
    Some(LoanSummary {
        monthly_payment: round_to(monthly, 2),
        total_payment: round_to(total, 2),
        total_interest: round_to(total - principal, 2),
        payments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_year_mortgage() {
        let summary = loan(Some(300_000.0), Some(3.5), Some(30.0)).unwrap();
        assert_eq!(summary.monthly_payment, 1347.13);
        assert_eq!(summary.payments, 360.0);
        assert!((summary.total_payment - 484_968.26).abs() < 0.01);
        assert!((summary.total_interest - 184_968.26).abs() < 0.01);
    }

    #[test]
    fn test_zero_rate_is_no_result() {
        assert!(loan(Some(10_000.0), Some(0.0), Some(5.0)).is_none());
    }

    #[test]
    fn test_missing_fields() {
        assert!(loan(None, Some(5.0), Some(5.0)).is_none());
        assert!(loan(Some(10_000.0), None, Some(5.0)).is_none());
        assert!(loan(Some(10_000.0), Some(5.0), None).is_none());
        assert!(loan(Some(-1.0), Some(5.0), Some(5.0)).is_none());
    }
}
