use crate::calc::round_to;
use serde::Serialize;

pub const TIP_PRESETS: [f64; 5] = [10.0, 15.0, 18.0, 20.0, 25.0];
pub const DEFAULT_TIP_PRESET: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "percent", rename_all = "lowercase")]
pub enum TipRate {
    Preset(f64),
    Custom(f64),
}

impl TipRate {
    /// A custom percentage, when given, overrides the selected preset.
    pub fn from_inputs(preset: Option<f64>, custom: Option<f64>) -> Self {
        match custom {
            Some(percent) => TipRate::Custom(percent),
            None => TipRate::Preset(preset.unwrap_or(DEFAULT_TIP_PRESET)),
        }
    }

    pub fn percent(&self) -> f64 {
        match self {
            TipRate::Preset(p) | TipRate::Custom(p) => *p,
        }
    }
}

impl Default for TipRate {
    fn default() -> Self {
        TipRate::Preset(DEFAULT_TIP_PRESET)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TipSplit {
    pub tip_amount: f64,
    pub total_amount: f64,
    pub per_person: f64,
    pub tip_per_person: f64,
}

/// Split a bill between `people` (at least one).
pub fn tip(bill: Option<f64>, rate: TipRate, people: Option<u32>) -> Option<TipSplit> {
    let bill = bill.filter(|b| *b > 0.0)?;
    let percent = rate.percent();
    if percent.is_nan() || percent < 0.0 {
        return None;
    }
    let people = people.filter(|p| *p >= 1)?;

    let tip_amount = bill * percent / 100.0;
    let total_amount = bill + tip_amount;
    let share = people as f64;
    Some(TipSplit {
        tip_amount: round_to(tip_amount, 2),
        total_amount: round_to(total_amount, 2),
        per_person: round_to(total_amount / share, 2),
        tip_per_person: round_to(tip_amount / share, 2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset() {
        let split = tip(Some(100.0), TipRate::default(), Some(1)).unwrap();
        assert_eq!(split.tip_amount, 18.0);
        assert_eq!(split.total_amount, 118.0);
        assert_eq!(split.per_person, 118.0);
    }

    #[test]
    fn test_custom_overrides_preset() {
        let rate = TipRate::from_inputs(Some(15.0), Some(22.0));
        assert_eq!(rate, TipRate::Custom(22.0));
        assert_eq!(TipRate::from_inputs(Some(15.0), None), TipRate::Preset(15.0));
        assert_eq!(TipRate::from_inputs(None, None), TipRate::Preset(18.0));
    }

    #[test]
    fn test_split_between_people() {
        let split = tip(Some(85.5), TipRate::Preset(20.0), Some(3)).unwrap();
        assert_eq!(split.tip_amount, 17.1);
        assert_eq!(split.total_amount, 102.6);
        assert_eq!(split.per_person, 34.2);
        assert_eq!(split.tip_per_person, 5.7);
    }

    #[test]
    fn test_no_result() {
        assert!(tip(None, TipRate::default(), Some(2)).is_none());
        assert!(tip(Some(50.0), TipRate::default(), Some(0)).is_none());
        assert!(tip(Some(50.0), TipRate::default(), None).is_none());
        assert!(tip(Some(50.0), TipRate::Custom(-5.0), None).is_none());
    }
}
