/// Six decimals with trailing zeros (and a bare decimal point) removed.
pub fn format_converted(value: f64) -> String {
    let fixed = format!("{:.6}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_converted() {
        assert_eq!(format_converted(3.28084), "3.28084");
        assert_eq!(format_converted(100.0), "100");
        assert_eq!(format_converted(0.0000004), "0");
        assert_eq!(format_converted(-0.0000004), "0");
        assert_eq!(format_converted(1.0 / 3.0), "0.333333");
        assert_eq!(format_converted(1500.25), "1500.25");
    }
}
