//! Field validation for a single loan submission.
//!
//! Every field is checked on its own and every failure is collected, so a
//! submission can come back with one, two or three errors at once.

use crate::domain::model::{FieldError, LoanField, LoanInput, RawLoanInput, ValidationErrors};

/// Exclusive upper bound on the repayment period, in years.
pub const MAX_REPAYMENT_YEARS: f64 = 20.0;

/// Validates raw submitted text.
pub fn validate(raw: &RawLoanInput) -> Result<LoanInput, ValidationErrors> {
    let loan_amount = raw.get(LoanField::LoanAmount).and_then(parse_number);
    let interest_rate = raw.get(LoanField::InterestRate).and_then(parse_number);
    let repayment_period = raw.get(LoanField::RepaymentPeriod).and_then(parse_number);

    check(loan_amount, interest_rate, repayment_period)
}

/// Validates input that is already numeric.
pub fn validate_values(
    loan_amount: f64,
    annual_interest_rate: f64,
    repayment_years: f64,
) -> Result<LoanInput, ValidationErrors> {
    let finite = |v: f64| Some(v).filter(|v| v.is_finite());
    check(
        finite(loan_amount),
        finite(annual_interest_rate),
        finite(repayment_years),
    )
}

fn check(
    loan_amount: Option<f64>,
    interest_rate: Option<f64>,
    repayment_period: Option<f64>,
) -> Result<LoanInput, ValidationErrors> {
    let loan_amount = loan_amount.filter(|v| *v > 0.0);
    let interest_rate = interest_rate.filter(|v| *v > 0.0);
    let repayment_period = repayment_period.filter(|v| *v > 0.0 && *v < MAX_REPAYMENT_YEARS);

    match (loan_amount, interest_rate, repayment_period) {
        (Some(loan_amount), Some(annual_interest_rate), Some(repayment_years)) => Ok(LoanInput {
            loan_amount,
            annual_interest_rate,
            repayment_years,
        }),
        (loan_amount, interest_rate, repayment_period) => {
            let errors = [
                (LoanField::LoanAmount, loan_amount),
                (LoanField::InterestRate, interest_rate),
                (LoanField::RepaymentPeriod, repayment_period),
            ]
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| FieldError::new(field))
            .collect::<Vec<_>>();

            tracing::debug!("Validation rejected {} field(s)", errors.len());
            Err(ValidationErrors::from(errors))
        }
    }
}

/// Parses one field. Blank text, NaN and infinities are not numbers here.
fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(amount: &str, rate: &str, period: &str) -> RawLoanInput {
        RawLoanInput::new(amount, rate, period)
    }

    #[test]
    fn test_accepts_valid_input() {
        let input = validate(&raw("300000", "6", "15")).unwrap();
        assert_eq!(input.loan_amount(), 300000.0);
        assert_eq!(input.annual_interest_rate(), 6.0);
        assert_eq!(input.repayment_years(), 15.0);
    }

    #[test]
    fn test_trims_whitespace() {
        assert!(validate(&raw(" 1000 ", "\t5.5", "10\n")).is_ok());
    }

    #[test]
    fn test_repayment_period_bounds() {
        assert!(validate(&raw("1000", "5", "19.999")).is_ok());

        for period in ["20", "20.0", "25", "0", "-1"] {
            let errors = validate(&raw("1000", "5", period)).unwrap_err();
            assert_eq!(errors.len(), 1, "period {period}");
            assert_eq!(
                errors.get(LoanField::RepaymentPeriod),
                Some("Invalid number, please enter a number greater than 0 and less than 20")
            );
        }
    }

    #[test]
    fn test_non_positive_amount_and_rate() {
        let errors = validate(&raw("0", "-2", "10")).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(LoanField::LoanAmount));
        assert!(errors.contains(LoanField::InterestRate));
        assert!(!errors.contains(LoanField::RepaymentPeriod));
    }

    #[test]
    fn test_non_numeric_and_absent_fields() {
        let input = RawLoanInput {
            loan_amount: Some("abc".to_string()),
            interest_rate: None,
            repayment_period: Some("".to_string()),
        };
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_rejects_nan_and_infinity() {
        let errors = validate(&raw("inf", "NaN", "10")).unwrap_err();
        assert!(errors.contains(LoanField::LoanAmount));
        assert!(errors.contains(LoanField::InterestRate));

        assert!(validate_values(f64::INFINITY, 5.0, 10.0).is_err());
        assert!(validate_values(1000.0, f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_validate_values_matches_text_rules() {
        assert!(validate_values(250000.0, 3.5, 19.999).is_ok());
        let errors = validate_values(-100.0, 5.0, 20.0).unwrap_err();
        assert!(errors.contains(LoanField::LoanAmount));
        assert!(errors.contains(LoanField::RepaymentPeriod));
        assert!(!errors.contains(LoanField::InterestRate));
    }
}
