use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurrencyError {
    #[error("Currency not supported: {0}")]
    Unsupported(String),
}
