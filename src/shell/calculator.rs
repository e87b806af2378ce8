use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The ten calculator screens the assistant can navigate to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorId {
    #[default]
    Standard,
    Scientific,
    Bmi,
    Currency,
    Date,
    Loan,
    Tip,
    Age,
    Unit,
    Percentage,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unknown calculator: {0}")]
pub struct UnknownCalculator(pub String);

impl CalculatorId {
    /// Navigation bar order
    pub const ALL: [CalculatorId; 10] = [
        CalculatorId::Standard,
        CalculatorId::Scientific,
        CalculatorId::Bmi,
        CalculatorId::Currency,
        CalculatorId::Date,
        CalculatorId::Loan,
        CalculatorId::Tip,
        CalculatorId::Age,
        CalculatorId::Unit,
        CalculatorId::Percentage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorId::Standard => "standard",
            CalculatorId::Scientific => "scientific",
            CalculatorId::Bmi => "bmi",
            CalculatorId::Currency => "currency",
            CalculatorId::Date => "date",
            CalculatorId::Loan => "loan",
            CalculatorId::Tip => "tip",
            CalculatorId::Age => "age",
            CalculatorId::Unit => "unit",
            CalculatorId::Percentage => "percentage",
        }
    }

    /// Label shown on the navigation tab
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculatorId::Standard => "Standard",
            CalculatorId::Scientific => "Scientific",
            CalculatorId::Bmi => "BMI",
            CalculatorId::Currency => "Currency",
            CalculatorId::Date => "Date",
            CalculatorId::Loan => "Loan",
            CalculatorId::Tip => "Tip",
            CalculatorId::Age => "Age",
            CalculatorId::Unit => "Unit",
            CalculatorId::Percentage => "Percentage",
        }
    }
}

impl fmt::Display for CalculatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculatorId {
    type Err = UnknownCalculator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        CalculatorId::ALL
            .into_iter()
            .find(|id| id.as_str() == needle)
            .ok_or(UnknownCalculator(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for id in CalculatorId::ALL {
            assert_eq!(id.as_str().parse::<CalculatorId>().unwrap(), id);
        }
        assert_eq!(" BMI ".parse::<CalculatorId>().unwrap(), CalculatorId::Bmi);
        assert!("contact".parse::<CalculatorId>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&CalculatorId::Percentage).unwrap();
        assert_eq!(json, "\"percentage\"");
    }
}
