use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrencyRate {
    pub code: &'static str,
    pub name: &'static str,
    /// Units of this currency per US dollar
    pub rate: f64,
}

// Fixed stand-ins for a live feed. Every rate is strictly positive.
pub static RATES: [CurrencyRate; 10] = [
    CurrencyRate { code: "USD", name: "US Dollar", rate: 1.0 },
    CurrencyRate { code: "EUR", name: "Euro", rate: 0.85 },
    CurrencyRate { code: "GBP", name: "British Pound", rate: 0.73 },
    CurrencyRate { code: "JPY", name: "Japanese Yen", rate: 110.0 },
    CurrencyRate { code: "CAD", name: "Canadian Dollar", rate: 1.25 },
    CurrencyRate { code: "AUD", name: "Australian Dollar", rate: 1.35 },
    CurrencyRate { code: "CHF", name: "Swiss Franc", rate: 0.92 },
    CurrencyRate { code: "CNY", name: "Chinese Yuan", rate: 6.45 },
    CurrencyRate { code: "INR", name: "Indian Rupee", rate: 74.5 },
    CurrencyRate { code: "BTC", name: "Bitcoin", rate: 0.000025 },
];

/// Shortcut buttons on the converter screen
pub const QUICK_PAIRS: [(&str, &str); 4] = [
    ("USD", "EUR"),
    ("USD", "GBP"),
    ("USD", "JPY"),
    ("EUR", "GBP"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rate_table_invariants() {
        let codes: HashSet<_> = RATES.iter().map(|r| r.code).collect();
        assert_eq!(codes.len(), RATES.len(), "currency codes must be unique");
        assert!(RATES.iter().all(|r| r.rate > 0.0));
        for (from, to) in QUICK_PAIRS {
            assert!(codes.contains(from) && codes.contains(to));
        }
    }
}
