#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::adapters::output::{OutputFormat, Renderer};
use crate::core::ConfigProvider;
use crate::domain::model::RawLoanInput;
use crate::utils::error::Result;
use crate::utils::validation::{validate_max_chars, Validate};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Effective settings after layering every provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub loan_input: RawLoanInput,
    pub output_format: OutputFormat,
    pub currency_symbol: String,
    pub log_level: Option<String>,
}

impl Settings {
    /// Earlier providers win: pass the command line first, then the file.
    pub fn resolve(providers: &[&dyn ConfigProvider]) -> Self {
        let loan_input = providers
            .iter()
            .fold(RawLoanInput::default(), |acc, p| acc.or(p.loan_input()));

        Self {
            loan_input,
            output_format: providers
                .iter()
                .find_map(|p| p.output_format())
                .unwrap_or_default(),
            currency_symbol: providers
                .iter()
                .find_map(|p| p.currency_symbol())
                .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
                .to_string(),
            log_level: providers
                .iter()
                .find_map(|p| p.log_level())
                .map(str::to_string),
        }
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.output_format, self.currency_symbol.clone())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&[])
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_max_chars(
            "output.currency_symbol",
            &self.currency_symbol,
            toml_config::MAX_CURRENCY_SYMBOL_CHARS,
        )
    }
}
