use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::units::error::UnitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Volume,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 4] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
        UnitCategory::Volume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
            UnitCategory::Weight => "weight",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Volume => "volume",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Volume => "Volume",
        }
    }

    /// Temperature scales have offsets, so the multiplier columns are unused there
    pub fn is_linear(&self) -> bool {
        !matches!(self, UnitCategory::Temperature)
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitCategory {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(UnitCategory::Length),
            "weight" | "mass" => Ok(UnitCategory::Weight),
            "temperature" | "temp" => Ok(UnitCategory::Temperature),
            "volume" => Ok(UnitCategory::Volume),
            other => Err(UnitError::UnknownCategory(other.to_string())),
        }
    }
}

/// One row of a category table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionUnit {
    /// Lookup key (e.g. "ft")
    pub key: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    /// Multiplier into the category's base unit
    pub to_base: f64,
    /// Multiplier out of the base unit
    pub from_base: f64,
}
