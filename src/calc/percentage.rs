use crate::expr::format_number;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentageMode {
    /// P% of V
    #[default]
    Of,
    /// V plus P%
    Increase,
    /// V minus P%
    Decrease,
    /// Relative change from V1 to V2
    Difference,
}

impl PercentageMode {
    pub const ALL: [PercentageMode; 4] = [
        PercentageMode::Of,
        PercentageMode::Increase,
        PercentageMode::Decrease,
        PercentageMode::Difference,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PercentageMode::Of => "of",
            PercentageMode::Increase => "increase",
            PercentageMode::Decrease => "decrease",
            PercentageMode::Difference => "difference",
        }
    }
}

impl fmt::Display for PercentageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PercentageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "of" | "basic" => Ok(PercentageMode::Of),
            "increase" => Ok(PercentageMode::Increase),
            "decrease" => Ok(PercentageMode::Decrease),
            "difference" | "diff" => Ok(PercentageMode::Difference),
            other => Err(format!("unknown percentage mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentageOutcome {
    /// Headline number: the result, the new total, or the percent change
    pub value: f64,
    pub narrative: String,
}

/// `value2` is only read by [`PercentageMode::Difference`], `percent` by the
/// other three. A missing or zero operand means there is nothing to show.
pub fn percentage(
    mode: PercentageMode,
    value1: Option<f64>,
    value2: Option<f64>,
    percent: Option<f64>,
) -> Option<PercentageOutcome> {
    let v1 = nonzero(value1)?;

    match mode {
        PercentageMode::Of => {
            let p = nonzero(percent)?;
            let result = v1 * p / 100.0;
            Some(PercentageOutcome {
                value: result,
                narrative: format!(
                    "{}% of {} = {:.2}",
                    format_number(p),
                    format_number(v1),
                    result
                ),
            })
        }
        PercentageMode::Increase => {
            let p = nonzero(percent)?;
            let increase = v1 * p / 100.0;
            let total = v1 + increase;
            Some(PercentageOutcome {
                value: total,
                narrative: format!(
                    "{} + {}% = {:.2} (increase of {:.2})",
                    format_number(v1),
                    format_number(p),
                    total,
                    increase
                ),
            })
        }
        PercentageMode::Decrease => {
            let p = nonzero(percent)?;
            let decrease = v1 * p / 100.0;
            let total = v1 - decrease;
            Some(PercentageOutcome {
                value: total,
                narrative: format!(
                    "{} - {}% = {:.2} (decrease of {:.2})",
                    format_number(v1),
                    format_number(p),
                    total,
                    decrease
                ),
            })
        }
        PercentageMode::Difference => {
            let v2 = nonzero(value2)?;
            let diff = (v2 - v1).abs();
            let percent_diff = diff / v1 * 100.0;
            let direction = if v2 > v1 { "Increase" } else { "Decrease" };
            Some(PercentageOutcome {
                value: percent_diff,
                narrative: format!(
                    "{} of {:.2}% (difference: {:.2})",
                    direction, percent_diff, diff
                ),
            })
        }
    }
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of() {
        let outcome = percentage(PercentageMode::Of, Some(80.0), None, Some(15.0)).unwrap();
        assert_eq!(outcome.value, 12.0);
        assert_eq!(outcome.narrative, "15% of 80 = 12.00");
    }

    #[test]
    fn test_increase_and_decrease() {
        let up = percentage(PercentageMode::Increase, Some(200.0), None, Some(10.0)).unwrap();
        assert_eq!(up.narrative, "200 + 10% = 220.00 (increase of 20.00)");
        assert_eq!(up.value, 220.0);

        let down = percentage(PercentageMode::Decrease, Some(49.99), None, Some(20.0)).unwrap();
        assert_eq!(down.narrative, "49.99 - 20% = 39.99 (decrease of 10.00)");
    }

    #[test]
    fn test_difference() {
        let outcome = percentage(PercentageMode::Difference, Some(50.0), Some(75.0), None).unwrap();
        assert_eq!(outcome.value, 50.0);
        assert_eq!(outcome.narrative, "Increase of 50.00% (difference: 25.00)");

        let outcome = percentage(PercentageMode::Difference, Some(80.0), Some(60.0), None).unwrap();
        assert_eq!(outcome.narrative, "Decrease of 25.00% (difference: 20.00)");

        let same = percentage(PercentageMode::Difference, Some(10.0), Some(10.0), None).unwrap();
        assert_eq!(same.narrative, "Decrease of 0.00% (difference: 0.00)");
    }

    #[test]
    fn test_zero_or_missing_is_no_result() {
        assert!(percentage(PercentageMode::Of, Some(0.0), None, Some(10.0)).is_none());
        assert!(percentage(PercentageMode::Of, Some(10.0), None, None).is_none());
        assert!(percentage(PercentageMode::Difference, Some(10.0), Some(0.0), None).is_none());
        assert!(percentage(PercentageMode::Increase, None, None, Some(5.0)).is_none());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("basic".parse::<PercentageMode>(), Ok(PercentageMode::Of));
        assert_eq!("Difference".parse::<PercentageMode>(), Ok(PercentageMode::Difference));
        assert!("half".parse::<PercentageMode>().is_err());
    }
}
