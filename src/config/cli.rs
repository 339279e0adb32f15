use crate::adapters::output::OutputFormat;
use crate::core::ConfigProvider;
use crate::domain::model::RawLoanInput;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mortgage-calc")]
#[command(about = "Monthly payment, total interest and total payment of an annuity loan")]
pub struct CliConfig {
    /// Loan amount in currency units
    #[arg(long, allow_hyphen_values = true)]
    pub loan_amount: Option<String>,

    /// Annual interest rate in percent, e.g. 5.5
    #[arg(long, allow_hyphen_values = true)]
    pub interest_rate: Option<String>,

    /// Repayment period in years, less than 20
    #[arg(long, allow_hyphen_values = true)]
    pub repayment_period: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read submissions from standard input until EOF or `quit`
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn loan_input(&self) -> RawLoanInput {
        RawLoanInput {
            loan_amount: self.loan_amount.clone(),
            interest_rate: self.interest_rate.clone(),
            repayment_period: self.repayment_period.clone(),
        }
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.format
    }

    fn currency_symbol(&self) -> Option<&str> {
        None
    }

    fn log_level(&self) -> Option<&str> {
        self.verbose.then_some("debug")
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", &path.to_string_lossy())?;
        }
        Ok(())
    }
}
