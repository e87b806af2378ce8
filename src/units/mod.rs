// Unit conversion for the unit converter screen and the CLI.
// Linear categories convert through a base unit; temperature pivots through Celsius.

pub mod converter;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod tables;
pub mod types;

pub use converter::{convert, convert_input, swap, SwappedUnits};
pub use detector::{looks_like_unit_string, parse_quantity};
pub use error::UnitError;
pub use formatter::format_converted;
pub use tables::{default_pair, find_unit, units_for};
pub use types::{ConversionUnit, UnitCategory};
