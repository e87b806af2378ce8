use crate::query::result::InterpretedResult;

pub fn format_result_json(result: &InterpretedResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| result.message().to_string())
}

/// One line for a terminal: the equation for calculations, the reply otherwise
pub fn format_result_text(result: &InterpretedResult) -> String {
    match result {
        InterpretedResult::Calculation { formatted, .. } => formatted.clone(),
        InterpretedResult::Navigation { target, message } => {
            format!("{} [-> {}]", message, target.display_name())
        }
        InterpretedResult::Error { message } => message.clone(),
    }
}
