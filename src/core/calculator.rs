//! Annuity loan repayment.
//!
//! ```text
//! M = P * r * (1 + r)^n / ((1 + r)^n - 1)
//! ```
//! with `r` the monthly fractional rate and `n` the number of monthly
//! payments. `n` may be fractional.

use crate::domain::model::{LoanInput, LoanResult};

const MONTHS_PER_YEAR: f64 = 12.0;

pub fn calculate(input: &LoanInput) -> LoanResult {
    calculate_raw(
        input.loan_amount,
        input.annual_interest_rate,
        input.repayment_years,
    )
}

/// Runs the formula without validation.
///
/// A zero rate or a non-positive period divides by zero; callers that cannot
/// guarantee the validator's bounds should go through [`calculate`].
pub fn calculate_raw(loan_amount: f64, annual_interest_rate: f64, repayment_years: f64) -> LoanResult {
    let r = monthly_rate(annual_interest_rate);
    let n = repayment_years * MONTHS_PER_YEAR;

    let growth = (1.0 + r).powf(n);
    let monthly_payment = loan_amount * r * growth / (growth - 1.0);
    let total_payment = monthly_payment * n;
    let total_interest = total_payment - loan_amount;

    LoanResult {
        monthly_payment: round_cents(monthly_payment),
        total_interest: round_cents(total_interest),
        total_payment: round_cents(total_payment),
    }
}

/// Annual percentage to per-month fraction: 6 -> 0.005.
pub fn monthly_rate(annual_interest_rate: f64) -> f64 {
    annual_interest_rate / 100.0 / MONTHS_PER_YEAR
}

/// Two decimal places, half away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::validate_values;

    #[test]
    fn test_reference_scenario() {
        let input = validate_values(300000.0, 6.0, 15.0).unwrap();
        let result = calculate(&input);

        assert_eq!(monthly_rate(6.0), 0.005);
        assert_eq!(result.monthly_payment, 2531.57);
        assert_eq!(result.total_payment, 455682.69);
        assert_eq!(result.total_interest, 155682.69);
    }

    #[test]
    fn test_fractional_period() {
        // 6 monthly payments
        let result = calculate_raw(200000.0, 4.5, 0.5);
        assert_eq!(result.monthly_payment, 33772.2);
        assert_eq!(result.total_payment, 202633.19);
        assert_eq!(result.total_interest, 2633.19);
    }

    #[test]
    fn test_is_pure() {
        let input = validate_values(100000.0, 5.0, 10.0).unwrap();
        assert_eq!(calculate(&input), calculate(&input));
        assert_eq!(calculate(&input).monthly_payment, 1060.66);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(1.005_000_1), 1.01);
        assert_eq!(round_cents(2.5), 2.5);
        assert_eq!(round_cents(-1.236), -1.24);
        assert_eq!(round_cents(88.848_788), 88.85);
    }
}
