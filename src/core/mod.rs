pub mod calculator;
pub mod engine;
pub mod validator;

pub use crate::domain::model::{LoanInput, LoanResult, RawLoanInput, ValidationErrors};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
