use crate::units::error::UnitError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect quantity strings
    /// Matches: number (optional sign and decimal) + optional whitespace + unit word
    /// Examples: "100 km", "10.5 m", "-40 °C", "3cup"
    static ref UNIT_PATTERN: Regex =
        Regex::new(r"^(-?[0-9]+(?:\.[0-9]+)?)\s*(°?[a-zA-Z]+)$").unwrap();
}

/// Check if a string looks like a quantity with a unit
pub fn looks_like_unit_string(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }
    UNIT_PATTERN.is_match(trimmed)
}

/// Split "5 km" into its value and unit text
pub fn parse_quantity(s: &str) -> Result<(f64, &str), UnitError> {
    let trimmed = s.trim();
    let caps = UNIT_PATTERN
        .captures(trimmed)
        .ok_or_else(|| UnitError::ParseError(s.to_string()))?;

    // Both groups are mandatory in the pattern
    let number = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    let unit = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
    let value = number
        .parse::<f64>()
        .map_err(|_| UnitError::ParseError(s.to_string()))?;

    Ok((value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_detection() {
        assert!(looks_like_unit_string("100 km"));
        assert!(looks_like_unit_string("10.5 m"));
        assert!(looks_like_unit_string("-40 °C"));
        assert!(looks_like_unit_string("3cup"));

        assert!(!looks_like_unit_string("100"));
        assert!(!looks_like_unit_string("km"));
        assert!(!looks_like_unit_string("hello world"));
        assert!(!looks_like_unit_string(""));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 5 km ").unwrap(), (5.0, "km"));
        assert_eq!(parse_quantity("-40 °F").unwrap(), (-40.0, "°F"));
        assert!(parse_quantity("five km").is_err());
    }
}
