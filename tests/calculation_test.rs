use mortgage_calc::{calculate, validate, LoanField, MortgageEngine, RawLoanInput};

const AMOUNT_ERROR: &str = "Invalid number, please enter a number greater than 0";
const PERIOD_ERROR: &str = "Invalid number, please enter a number greater than 0 and less than 20";

#[test]
fn test_reference_mortgage() {
    let input = validate(&RawLoanInput::new("300000", "6", "15")).unwrap();
    let result = calculate(&input);

    assert_eq!(result.monthly_payment, 2531.57);
    assert_eq!(result.total_payment, 455682.69);
    assert_eq!(result.total_interest, 155682.69);
}

#[test]
fn test_totals_are_consistent_across_inputs() {
    let cases = [
        (300000.0, 6.0, 15.0),
        (100000.0, 5.0, 10.0),
        (250000.0, 3.5, 19.999),
        (1000.0, 12.0, 1.0),
        (200000.0, 4.5, 0.5),
        (500000.0, 7.25, 19.0),
        (75000.0, 0.25, 3.75),
    ];

    for (amount, rate, years) in cases {
        let raw = RawLoanInput::new(amount.to_string(), rate.to_string(), years.to_string());
        let result = calculate(&validate(&raw).unwrap());
        let n = years * 12.0;

        // monthly_payment 已四捨五入，誤差最多半分乘以期數
        let tolerance = 0.005 * n + 0.01;
        assert!(
            (result.total_payment - result.monthly_payment * n).abs() <= tolerance,
            "{amount} {rate} {years}: {result:?}"
        );
        assert!(
            (result.total_interest - (result.total_payment - amount)).abs() <= 0.01 + 1e-9,
            "{amount} {rate} {years}: {result:?}"
        );
        assert!(result.total_interest > 0.0);
    }
}

#[test]
fn test_negative_amount_only_flags_amount() {
    let errors = validate(&RawLoanInput::new("-100", "5", "10")).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(LoanField::LoanAmount), Some(AMOUNT_ERROR));
    assert_eq!(errors.get(LoanField::InterestRate), None);
    assert_eq!(errors.get(LoanField::RepaymentPeriod), None);
}

#[test]
fn test_period_of_twenty_is_rejected() {
    let errors = validate(&RawLoanInput::new("300000", "6", "20")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(LoanField::RepaymentPeriod), Some(PERIOD_ERROR));

    assert!(validate(&RawLoanInput::new("300000", "6", "19.999")).is_ok());
}

#[test]
fn test_zero_rate_is_rejected() {
    let errors = validate(&RawLoanInput::new("300000", "0", "15")).unwrap_err();
    assert_eq!(errors.get(LoanField::InterestRate), Some(AMOUNT_ERROR));
}

#[test]
fn test_all_fields_invalid_at_once() {
    let errors = validate(&RawLoanInput::new("0", "abc", "-3")).unwrap_err();
    let fields: Vec<LoanField> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, LoanField::ALL.to_vec());
}

#[test]
fn test_engine_sequence() {
    let mut engine = MortgageEngine::new();
    assert!(engine.last_result().is_none());

    let first = engine.submit(&RawLoanInput::new("300000", "6", "15")).unwrap();
    assert!(engine.submit(&RawLoanInput::new("300000", "6", "20")).is_err());
    assert_eq!(engine.last_result(), Some(&first));

    let again = engine.submit(&RawLoanInput::new("300000", "6", "15")).unwrap();
    assert_eq!(first, again);
}
