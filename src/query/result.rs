use crate::shell::CalculatorId;
use serde::Serialize;

pub const APOLOGY: &str =
    "Sorry, I encountered an error processing your request. Please try again.";

pub const GUIDANCE: &str = "I can help you with calculations and navigate between calculators. \
    Try asking me to 'calculate 15% of 200' or 'open the BMI calculator'.";

/// What the assistant made of a query. Exactly one outcome per query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InterpretedResult {
    Calculation {
        value: f64,
        formatted: String,
        message: String,
    },
    Navigation {
        #[serde(rename = "calculator")]
        target: CalculatorId,
        message: String,
    },
    Error {
        message: String,
    },
}

impl InterpretedResult {
    pub fn navigation(target: CalculatorId) -> Self {
        InterpretedResult::Navigation {
            target,
            message: format!(
                "I'll help you with {target} calculations. Navigating to the {target} calculator."
            ),
        }
    }

    pub(crate) fn apology() -> Self {
        InterpretedResult::Error {
            message: APOLOGY.to_string(),
        }
    }

    pub(crate) fn guidance() -> Self {
        InterpretedResult::Error {
            message: GUIDANCE.to_string(),
        }
    }

    /// The assistant's reply as shown in the chat transcript
    pub fn message(&self) -> &str {
        match self {
            InterpretedResult::Calculation { message, .. }
            | InterpretedResult::Navigation { message, .. }
            | InterpretedResult::Error { message } => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, InterpretedResult::Error { .. })
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            InterpretedResult::Calculation { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<CalculatorId> {
        match self {
            InterpretedResult::Navigation { target, .. } => Some(*target),
            _ => None,
        }
    }
}
