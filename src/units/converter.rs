use crate::units::error::UnitError;
use crate::units::formatter::format_converted;
use crate::units::tables::lookup;
use crate::units::types::{ConversionUnit, UnitCategory};
use serde::Serialize;

fn require(category: UnitCategory, key: &str) -> Result<&'static ConversionUnit, UnitError> {
    lookup(category, key).ok_or_else(|| UnitError::UnknownUnit {
        category,
        unit: key.to_string(),
    })
}

/// Convert `value` between two units of the same category.
pub fn convert(
    category: UnitCategory,
    from: &str,
    to: &str,
    value: f64,
) -> Result<f64, UnitError> {
    let from_unit = require(category, from)?;
    let to_unit = require(category, to)?;

    if category.is_linear() {
        let base_value = value * from_unit.to_base;
        Ok(base_value * to_unit.from_base)
    } else {
        Ok(convert_temperature(value, from_unit.key, to_unit.key))
    }
}

fn convert_temperature(value: f64, from: &str, to: &str) -> f64 {
    if from == to {
        return value;
    }

    let celsius = match from {
        "f" => (value - 32.0) * 5.0 / 9.0,
        "k" => value - 273.15,
        _ => value,
    };

    match to {
        "f" => celsius * 9.0 / 5.0 + 32.0,
        "k" => celsius + 273.15,
        _ => celsius,
    }
}

/// The converter screen's contract: the formatted target value, or `None`
/// when there is nothing to show. Lengths, weights and volumes must be
/// positive; any finite temperature is accepted.
pub fn convert_input(
    category: UnitCategory,
    from: &str,
    to: &str,
    value: Option<f64>,
) -> Option<String> {
    let value = value.filter(|v| v.is_finite())?;
    if category.is_linear() && value <= 0.0 {
        return None;
    }
    convert(category, from, to, value).ok().map(format_converted)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwappedUnits {
    pub from: String,
    pub to: String,
    pub value: String,
}

/// Swap button: exchange the units and carry the current result over as the
/// new input (or "1" when there is no result yet).
pub fn swap(from: &str, to: &str, converted: Option<&str>) -> SwappedUnits {
    SwappedUnits {
        from: to.to_string(),
        to: from.to_string(),
        value: converted
            .filter(|v| !v.is_empty())
            .unwrap_or("1")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_linear_conversion() {
        assert!(close(
            convert(UnitCategory::Length, "m", "ft", 1.0).unwrap(),
            3.28084
        ));
        assert!(close(
            convert(UnitCategory::Weight, "kg", "g", 2.5).unwrap(),
            2500.0
        ));
        assert!(close(
            convert(UnitCategory::Volume, "gal", "l", 1.0).unwrap(),
            3.78541
        ));
    }

    #[test]
    fn test_temperature_pivots_through_celsius() {
        assert!(close(
            convert(UnitCategory::Temperature, "c", "f", 100.0).unwrap(),
            212.0
        ));
        assert!(close(
            convert(UnitCategory::Temperature, "f", "k", 32.0).unwrap(),
            273.15
        ));
        assert!(close(
            convert(UnitCategory::Temperature, "k", "c", 0.0).unwrap(),
            -273.15
        ));
        assert_eq!(
            convert(UnitCategory::Temperature, "f", "f", 451.0).unwrap(),
            451.0
        );
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            convert(UnitCategory::Length, "m", "lb", 1.0),
            Err(UnitError::UnknownUnit {
                category: UnitCategory::Length,
                unit: "lb".to_string()
            })
        );
    }

    #[test]
    fn test_convert_input_policy() {
        assert_eq!(
            convert_input(UnitCategory::Length, "m", "ft", Some(1.0)),
            Some("3.28084".to_string())
        );
        assert_eq!(convert_input(UnitCategory::Length, "m", "ft", Some(0.0)), None);
        assert_eq!(convert_input(UnitCategory::Length, "m", "ft", Some(-2.0)), None);
        assert_eq!(convert_input(UnitCategory::Length, "m", "ft", None), None);
        assert_eq!(
            convert_input(UnitCategory::Temperature, "c", "f", Some(-40.0)),
            Some("-40".to_string())
        );
    }

    #[test]
    fn test_swap() {
        let swapped = swap("m", "ft", Some("3.28084"));
        assert_eq!(swapped.from, "ft");
        assert_eq!(swapped.to, "m");
        assert_eq!(swapped.value, "3.28084");
        assert_eq!(swap("m", "ft", None).value, "1");
    }
}
