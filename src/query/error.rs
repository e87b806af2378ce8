use crate::expr::ExprError;
use thiserror::Error;

/// Internal failures of a rule handler. Never reaches the caller of
/// `interpret`, which turns every one of these into the apology message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid math expression: {0}")]
    Expression(#[from] ExprError),

    #[error("Rule '{0}' accepted a query it cannot handle")]
    PatternMismatch(&'static str),
}
