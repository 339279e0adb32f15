use crate::adapters::output::OutputFormat;
use crate::core::ConfigProvider;
use crate::domain::model::RawLoanInput;
use crate::utils::error::{MortgageError, Result};
use crate::utils::validation::{validate_max_chars, validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_CURRENCY_SYMBOL_CHARS: usize = 8;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub defaults: Option<DefaultsConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

/// Field values used when a submission leaves them out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub loan_amount: Option<f64>,
    pub interest_rate: Option<f64>,
    pub repayment_period: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub currency_symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());
        // 讀不到配置檔視為配置錯誤，而非系統錯誤
        let content = std::fs::read_to_string(path)
            .map_err(|e| MortgageError::config("config", format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${LOAN_AMOUNT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| MortgageError::config("toml_parsing", e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    fn format_str(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.format.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn loan_input(&self) -> RawLoanInput {
        let defaults = self.defaults.clone().unwrap_or_default();
        RawLoanInput {
            loan_amount: defaults.loan_amount.map(|v| v.to_string()),
            interest_rate: defaults.interest_rate.map(|v| v.to_string()),
            repayment_period: defaults.repayment_period.map(|v| v.to_string()),
        }
    }

    fn output_format(&self) -> Option<OutputFormat> {
        // validate() 已檢查格式，這裡忽略無法解析的值
        self.format_str().and_then(|f| f.parse().ok())
    }

    fn currency_symbol(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.currency_symbol.as_deref())
    }

    fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = self.format_str() {
            validate_one_of("output.format", &format.to_ascii_lowercase(), &["text", "json"])?;
        }

        if let Some(symbol) = self.currency_symbol() {
            validate_max_chars("output.currency_symbol", symbol, MAX_CURRENCY_SYMBOL_CHARS)?;
        }

        if let Some(level) = self.log_level() {
            validate_non_empty_string("logging.level", level)?;
        }

        Ok(())
    }
}
