use crate::units::types::UnitCategory;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Unknown {category} unit: {unit}")]
    UnknownUnit { category: UnitCategory, unit: String },

    #[error("Unknown unit category: {0}")]
    UnknownCategory(String),

    #[error("Could not parse quantity: {0}")]
    ParseError(String),
}
