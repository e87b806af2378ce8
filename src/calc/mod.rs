// Formula components behind each calculator screen.
//
// Every component is a pure function of its inputs. Missing, non-numeric or
// out-of-range input yields `None` ("no result to show"), never an error.

pub mod age;
pub mod bmi;
pub mod date;
pub mod loan;
pub mod percentage;
pub mod scientific;
pub mod standard;
pub mod tip;

pub use age::{age, AgeBreakdown};
pub use bmi::{bmi, BmiCategory, BmiReading, UnitSystem};
pub use date::{difference, shift, DateDifference, Direction};
pub use loan::{loan, LoanSummary};
pub use percentage::{percentage, PercentageMode, PercentageOutcome};
pub use scientific::{ScientificCalculator, SCIENTIFIC_BUTTONS};
pub use standard::{Key, Operator, StandardCalculator};
pub use tip::{tip, TipRate, TipSplit, DEFAULT_TIP_PRESET, TIP_PRESETS};

/// Read a form field as a number. Blank or unparsable text is `None`.
pub fn parse_input(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Read a whole-number form field ("2.7" reads as 2)
pub fn parse_count(text: &str) -> Option<u32> {
    parse_input(text)
        .filter(|v| *v >= 0.0 && *v <= u32::MAX as f64)
        .map(|v| v.trunc() as u32)
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input(" 70 "), Some(70.0));
        assert_eq!(parse_input("1.5e3"), Some(1500.0));
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("abc"), None);
        assert_eq!(parse_input("inf"), None);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3"), Some(3));
        assert_eq!(parse_count("2.7"), Some(2));
        assert_eq!(parse_count("-1"), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1347.1306, 2), 1347.13);
        assert_eq!(round_to(24.2214, 1), 24.2);
    }
}
