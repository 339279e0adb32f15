use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// The three values a user submits, exactly as entered.
///
/// Each field may be absent, non-numeric or numeric; nothing is checked
/// until the submission goes through the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawLoanInput {
    pub loan_amount: Option<String>,
    pub interest_rate: Option<String>,
    pub repayment_period: Option<String>,
}

impl RawLoanInput {
    pub fn new(
        loan_amount: impl Into<String>,
        interest_rate: impl Into<String>,
        repayment_period: impl Into<String>,
    ) -> Self {
        Self {
            loan_amount: Some(loan_amount.into()),
            interest_rate: Some(interest_rate.into()),
            repayment_period: Some(repayment_period.into()),
        }
    }

    pub fn get(&self, field: LoanField) -> Option<&str> {
        match field {
            LoanField::LoanAmount => self.loan_amount.as_deref(),
            LoanField::InterestRate => self.interest_rate.as_deref(),
            LoanField::RepaymentPeriod => self.repayment_period.as_deref(),
        }
    }

    pub fn set(&mut self, field: LoanField, value: Option<String>) {
        match field {
            LoanField::LoanAmount => self.loan_amount = value,
            LoanField::InterestRate => self.interest_rate = value,
            LoanField::RepaymentPeriod => self.repayment_period = value,
        }
    }

    /// Fills every absent field from `fallback`.
    pub fn or(mut self, fallback: RawLoanInput) -> Self {
        self.loan_amount = self.loan_amount.or(fallback.loan_amount);
        self.interest_rate = self.interest_rate.or(fallback.interest_rate);
        self.repayment_period = self.repayment_period.or(fallback.repayment_period);
        self
    }
}

/// A loan whose three fields all passed validation.
///
/// Only the validator constructs this type, so holding one proves the
/// calculator's preconditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanInput {
    pub(crate) loan_amount: f64,
    pub(crate) annual_interest_rate: f64,
    pub(crate) repayment_years: f64,
}

impl LoanInput {
    pub fn loan_amount(&self) -> f64 {
        self.loan_amount
    }

    /// Percentage points, 5.5 means 5.5%.
    pub fn annual_interest_rate(&self) -> f64 {
        self.annual_interest_rate
    }

    pub fn repayment_years(&self) -> f64 {
        self.repayment_years
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResult {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoanField {
    LoanAmount,
    InterestRate,
    RepaymentPeriod,
}

impl LoanField {
    pub const ALL: [LoanField; 3] = [
        LoanField::LoanAmount,
        LoanField::InterestRate,
        LoanField::RepaymentPeriod,
    ];

    /// External name used in error maps and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            LoanField::LoanAmount => "loanAmount",
            LoanField::InterestRate => "interestRate",
            LoanField::RepaymentPeriod => "repaymentPeriod",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoanField::LoanAmount => "Loan Amount ($)",
            LoanField::InterestRate => "Interest Rate (%)",
            LoanField::RepaymentPeriod => "Repayment Period (years)",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            LoanField::LoanAmount | LoanField::InterestRate => {
                "Invalid number, please enter a number greater than 0"
            }
            LoanField::RepaymentPeriod => {
                "Invalid number, please enter a number greater than 0 and less than 20"
            }
        }
    }
}

impl fmt::Display for LoanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: LoanField,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: LoanField) -> Self {
        Self {
            field,
            message: field.error_message(),
        }
    }
}

/// Every invalid field of one submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", describe(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn get(&self, field: LoanField) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn contains(&self, field: LoanField) -> bool {
        self.get(field).is_some()
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(mut errors: Vec<FieldError>) -> Self {
        errors.sort_by_key(|e| e.field);
        errors.dedup_by_key(|e| e.field);
        Self(errors)
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for error in &self.0 {
            map.serialize_entry(error.field.name(), error.message)?;
        }
        map.end()
    }
}
