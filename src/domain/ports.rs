use crate::adapters::output::OutputFormat;
use crate::domain::model::RawLoanInput;

/// A source of settings: command-line flags, a TOML file, built-in defaults.
///
/// Every accessor returns `None` when the source has no opinion, so several
/// providers can be layered with the first answer winning.
pub trait ConfigProvider {
    fn loan_input(&self) -> RawLoanInput;
    fn output_format(&self) -> Option<OutputFormat>;
    fn currency_symbol(&self) -> Option<&str>;
    fn log_level(&self) -> Option<&str>;
}
