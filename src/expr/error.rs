use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("Expression is empty")]
    Empty,

    #[error("Unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),

    #[error("Unknown name '{0}' at position {1}")]
    UnknownName(String, usize),

    #[error("Unexpected '{0}' at position {1}")]
    UnexpectedToken(String, usize),

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Unbalanced parenthesis at position {0}")]
    UnbalancedParen(usize),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFinite,

    #[error("Expression nests deeper than {0} levels")]
    TooDeep(usize),
}
