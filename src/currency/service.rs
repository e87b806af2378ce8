use crate::currency::error::CurrencyError;
use crate::currency::rates::{CurrencyRate, RATES};
use serde::Serialize;
use tracing::warn;

/// Read-only view over the rate table
#[derive(Debug, Clone, Copy)]
pub struct CurrencyService {
    rates: &'static [CurrencyRate],
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyService {
    pub fn new() -> Self {
        Self { rates: &RATES }
    }

    pub fn currencies(&self) -> &'static [CurrencyRate] {
        self.rates
    }

    /// Look up a code, ignoring case and surrounding whitespace
    pub fn find(&self, code: &str) -> Result<&'static CurrencyRate, CurrencyError> {
        let code = code.trim();
        self.rates
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| CurrencyError::Unsupported(code.to_string()))
    }

    /// Two hops: source to USD, then USD to target
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, CurrencyError> {
        let from_rate = self.find(from)?.rate;
        let to_rate = self.find(to)?.rate;
        let usd_amount = amount / from_rate;
        Ok(usd_amount * to_rate)
    }

    /// Units of `to` per one unit of `from`
    pub fn exchange_rate(&self, from: &str, to: &str) -> Result<f64, CurrencyError> {
        let from_rate = self.find(from)?.rate;
        let to_rate = self.find(to)?.rate;
        Ok(to_rate / from_rate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyQuote {
    pub converted: f64,
    pub rate: f64,
}

/// The converter screen's contract: a quote for a positive amount, `None` otherwise.
pub fn convert_input(amount: Option<f64>, from: &str, to: &str) -> Option<CurrencyQuote> {
    let amount = amount.filter(|a| a.is_finite() && *a > 0.0)?;
    let service = CurrencyService::new();

    let quote = service.convert(amount, from, to).and_then(|converted| {
        let rate = service.exchange_rate(from, to)?;
        Ok(CurrencyQuote { converted, rate })
    });

    match quote {
        Ok(quote) => Some(quote),
        Err(e) => {
            warn!("Conversion failed: {}", e);
            None
        }
    }
}
