pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::output::{OutputFormat, Renderer};
pub use adapters::prompt::PromptSession;
pub use config::{toml_config::TomlConfig, Settings};
pub use self::core::calculator::{calculate, calculate_raw};
pub use self::core::engine::MortgageEngine;
pub use self::core::validator::{validate, validate_values};
pub use domain::model::{FieldError, LoanField, LoanInput, LoanResult, RawLoanInput, ValidationErrors};
pub use utils::error::{MortgageError, Result};
