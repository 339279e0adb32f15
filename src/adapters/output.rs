use crate::domain::model::{LoanResult, ValidationErrors};
use crate::utils::error::{MortgageError, Result};
use serde::ser::Error as _;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(MortgageError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: text, json".to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    errors: &'a ValidationErrors,
}

/// Turns results and validation failures into printable text.
#[derive(Debug, Clone)]
pub struct Renderer {
    format: OutputFormat,
    currency_symbol: String,
}

impl Renderer {
    pub fn new(format: OutputFormat, currency_symbol: impl Into<String>) -> Self {
        Self {
            format,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Fails for results that overflowed, so no `inf` or `null` reaches the output.
    pub fn render_result(&self, result: &LoanResult) -> Result<String> {
        let figures = [
            ("monthlyPayment", result.monthly_payment),
            ("totalInterest", result.total_interest),
            ("totalPayment", result.total_payment),
        ];
        if let Some((name, value)) = figures.iter().find(|(_, v)| !v.is_finite()) {
            return Err(MortgageError::SerializationError(serde_json::Error::custom(
                format!("{} is not a finite number ({})", name, value),
            )));
        }

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(result)?),
            OutputFormat::Text => {
                let c = &self.currency_symbol;
                Ok(format!(
                    "Calculation Results\nMonthly Payment: {c}{}\nTotal Interest: {c}{}\nTotal Payment: {c}{}",
                    result.monthly_payment, result.total_interest, result.total_payment
                ))
            }
        }
    }

    pub fn render_errors(&self, errors: &ValidationErrors) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(&ErrorEnvelope { errors })?),
            OutputFormat::Text => Ok(errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(OutputFormat::Text, "$")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FieldError, LoanField};

    fn sample() -> LoanResult {
        LoanResult {
            monthly_payment: 2531.57,
            total_interest: 155682.69,
            total_payment: 455682.69,
        }
    }

    #[test]
    fn test_text_result() {
        let text = Renderer::default().render_result(&sample()).unwrap();
        assert_eq!(
            text,
            "Calculation Results\nMonthly Payment: $2531.57\nTotal Interest: $155682.69\nTotal Payment: $455682.69"
        );
    }

    #[test]
    fn test_text_result_custom_symbol() {
        let text = Renderer::new(OutputFormat::Text, "€")
            .render_result(&sample())
            .unwrap();
        assert!(text.contains("Monthly Payment: €2531.57"));
    }

    #[test]
    fn test_json_errors() {
        let errors = ValidationErrors::from(vec![FieldError::new(LoanField::InterestRate)]);
        let json = Renderer::new(OutputFormat::Json, "$")
            .render_errors(&errors)
            .unwrap();
        assert_eq!(
            json,
            r#"{"errors":{"interestRate":"Invalid number, please enter a number greater than 0"}}"#
        );
    }

    #[test]
    fn test_text_errors_one_per_line() {
        let errors = ValidationErrors::from(vec![
            FieldError::new(LoanField::LoanAmount),
            FieldError::new(LoanField::RepaymentPeriod),
        ]);
        let text = Renderer::default().render_errors(&errors).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("loanAmount: "));
        assert!(lines[1].starts_with("repaymentPeriod: "));
    }

    #[test]
    fn test_overflowing_result_is_refused() {
        let input = crate::core::validator::validate_values(1e308, 6.0, 15.0).unwrap();
        let result = crate::core::calculator::calculate(&input);
        assert!(!result.total_payment.is_finite());

        for format in [OutputFormat::Text, OutputFormat::Json] {
            let err = Renderer::new(format, "$").render_result(&result).unwrap_err();
            assert!(matches!(err, MortgageError::SerializationError(_)));
            assert_eq!(err.severity().exit_code(), 3);
        }
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
