use crate::core::{calculator, validator};
use crate::domain::model::{LoanResult, RawLoanInput, ValidationErrors};

/// Runs submissions one at a time and remembers the latest result.
#[derive(Debug, Default)]
pub struct MortgageEngine {
    last_result: Option<LoanResult>,
    submissions: usize,
}

impl MortgageEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `raw` and, only when every field passes, calculates.
    ///
    /// A rejected submission leaves the previous result in place.
    pub fn submit(&mut self, raw: &RawLoanInput) -> Result<LoanResult, ValidationErrors> {
        self.submissions += 1;
        tracing::debug!("Submission #{}: {:?}", self.submissions, raw);

        let input = match validator::validate(raw) {
            Ok(input) => input,
            Err(errors) => {
                for error in errors.iter() {
                    tracing::warn!("❌ {}", error);
                }
                return Err(errors);
            }
        };

        let result = calculator::calculate(&input);
        tracing::info!(
            "✅ Monthly payment {:.2} over {} months",
            result.monthly_payment,
            input.repayment_years() * 12.0
        );

        self.last_result = Some(result);
        Ok(result)
    }

    pub fn last_result(&self) -> Option<&LoanResult> {
        self.last_result.as_ref()
    }

    pub fn submissions(&self) -> usize {
        self.submissions
    }

    pub fn reset(&mut self) {
        self.last_result = None;
        self.submissions = 0;
    }
}
