// Arithmetic evaluation shared by the assistant and the keypad calculators.
// Input is tokenised and walked by a recursive-descent parser; nothing is executed.

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::ExprError;
pub use parser::{evaluate, evaluate_with, AngleMode, EvalOptions};

/// Render a number the way the calculators display it: integers without a
/// fractional part, otherwise the shortest decimal that round-trips.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        return match formatted.find('e') {
            Some(idx) if !formatted[idx + 1..].starts_with('-') => {
                format!("{}e+{}", &formatted[..idx], &formatted[idx + 1..])
            }
            _ => formatted,
        };
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(2.5e-7), "2.5e-7");
    }
}
