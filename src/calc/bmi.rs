use crate::calc::round_to;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilograms and centimetres
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::NormalWeight,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Reference scale shown under the result
    pub fn range_label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "< 18.5",
            BmiCategory::NormalWeight => "18.5 - 24.9",
            BmiCategory::Overweight => "25.0 - 29.9",
            BmiCategory::Obese => "≥ 30.0",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiReading {
    /// Rounded to one decimal
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiReading {
    /// Position on a 0-40 gauge, in percent
    pub fn scale_position(&self) -> f64 {
        (self.bmi / 40.0 * 100.0).min(100.0)
    }
}

pub fn bmi(weight: Option<f64>, height: Option<f64>, system: UnitSystem) -> Option<BmiReading> {
    let weight = weight.filter(|w| *w > 0.0)?;
    let height = height.filter(|h| *h > 0.0)?;

    let value = match system {
        UnitSystem::Metric => {
            let meters = height / 100.0;
            weight / (meters * meters)
        }
        UnitSystem::Imperial => weight / (height * height) * 703.0,
    };
    if !value.is_finite() {
        return None;
    }

    let bmi = round_to(value, 1);
    Some(BmiReading {
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}
