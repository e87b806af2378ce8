// Currency conversion against a fixed USD-relative rate table.

pub mod error;
pub mod rates;
pub mod service;

pub use error::CurrencyError;
pub use rates::{CurrencyRate, QUICK_PAIRS, RATES};
pub use service::{convert_input, CurrencyQuote, CurrencyService};
