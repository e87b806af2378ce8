use crate::units::types::{ConversionUnit, UnitCategory};

const fn unit(
    key: &'static str,
    name: &'static str,
    symbol: &'static str,
    to_base: f64,
    from_base: f64,
) -> ConversionUnit {
    ConversionUnit {
        key,
        name,
        symbol,
        to_base,
        from_base,
    }
}

// Base unit: meter
static LENGTH: [ConversionUnit; 8] = [
    unit("mm", "Millimeter", "mm", 0.001, 1000.0),
    unit("cm", "Centimeter", "cm", 0.01, 100.0),
    unit("m", "Meter", "m", 1.0, 1.0),
    unit("km", "Kilometer", "km", 1000.0, 0.001),
    unit("in", "Inch", "in", 0.0254, 39.3701),
    unit("ft", "Foot", "ft", 0.3048, 3.28084),
    unit("yd", "Yard", "yd", 0.9144, 1.09361),
    unit("mi", "Mile", "mi", 1609.34, 0.000621371),
];

// Base unit: kilogram
static WEIGHT: [ConversionUnit; 6] = [
    unit("mg", "Milligram", "mg", 0.000001, 1000000.0),
    unit("g", "Gram", "g", 0.001, 1000.0),
    unit("kg", "Kilogram", "kg", 1.0, 1.0),
    unit("oz", "Ounce", "oz", 0.0283495, 35.274),
    unit("lb", "Pound", "lb", 0.453592, 2.20462),
    unit("ton", "Ton", "t", 1000.0, 0.001),
];

// Multipliers are placeholders; see converter::convert_temperature
static TEMPERATURE: [ConversionUnit; 3] = [
    unit("c", "Celsius", "°C", 1.0, 1.0),
    unit("f", "Fahrenheit", "°F", 1.0, 1.0),
    unit("k", "Kelvin", "K", 1.0, 1.0),
];

// Base unit: liter
static VOLUME: [ConversionUnit; 6] = [
    unit("ml", "Milliliter", "ml", 0.001, 1000.0),
    unit("l", "Liter", "l", 1.0, 1.0),
    unit("gal", "Gallon (US)", "gal", 3.78541, 0.264172),
    unit("qt", "Quart", "qt", 0.946353, 1.05669),
    unit("pt", "Pint", "pt", 0.473176, 2.11338),
    unit("cup", "Cup", "cup", 0.236588, 4.22675),
];

/// Units of a category in display order; the first two are the default pair.
pub fn units_for(category: UnitCategory) -> &'static [ConversionUnit] {
    match category {
        UnitCategory::Length => &LENGTH,
        UnitCategory::Weight => &WEIGHT,
        UnitCategory::Temperature => &TEMPERATURE,
        UnitCategory::Volume => &VOLUME,
    }
}

pub fn lookup(category: UnitCategory, key: &str) -> Option<&'static ConversionUnit> {
    units_for(category).iter().find(|u| u.key == key)
}

/// Default (from, to) selection when a category is opened
pub fn default_pair(category: UnitCategory) -> (&'static str, &'static str) {
    let units = units_for(category);
    let from = units[0].key;
    let to = units.get(1).map(|u| u.key).unwrap_or(from);
    (from, to)
}

/// Find a unit in any category by key, symbol or name (case-insensitive,
/// plurals accepted). Used to infer the category from input such as "5 km".
pub fn find_unit(text: &str) -> Option<(UnitCategory, &'static ConversionUnit)> {
    let needle = text.trim().trim_start_matches('°').to_lowercase();
    let mut candidates = vec![needle.as_str()];
    if needle == "feet" {
        candidates.push("foot");
    }
    if let Some(stem) = needle.strip_suffix("es") {
        candidates.push(stem);
    }
    if let Some(stem) = needle.strip_suffix('s') {
        candidates.push(stem);
    }

    candidates.into_iter().find_map(|candidate| {
        UnitCategory::ALL.into_iter().find_map(|category| {
            units_for(category)
                .iter()
                .find(|u| {
                    u.key == candidate
                        || u.symbol.trim_start_matches('°').to_lowercase() == candidate
                        || u.name.to_lowercase() == candidate
                })
                .map(|u| (category, u))
        })
    })
}
