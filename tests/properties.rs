use chrono::{Datelike, NaiveDate};
use omnicalc::calc::{self, Direction, TipRate};
use omnicalc::currency::CurrencyService;
use omnicalc::query::{interpret, InterpretedResult};
use omnicalc::units::{self, UnitCategory};
use proptest::prelude::*;

fn date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn percentage_query_matches_formula(p in 0u32..100_000, v in 0u32..100_000) {
        let (p, v) = (p as f64 / 100.0, v as f64 / 10.0);
        let result = interpret(&format!("what is {}% of {}", p, v));
        match result {
            InterpretedResult::Calculation { value, .. } => {
                prop_assert!(close(value, p * v / 100.0))
            }
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn arithmetic_uses_precedence(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let result = interpret(&format!("{} + {} * {}", a, b, c));
        let expected = a as f64 + (b as f64) * (c as f64);
        prop_assert_eq!(result.value(), Some(expected));
    }

    #[test]
    fn currency_round_trip(amount in 0.01f64..1_000_000.0, from in 0usize..10, to in 0usize..10) {
        let service = CurrencyService::new();
        let codes: Vec<&str> = service.currencies().iter().map(|c| c.code).collect();
        let there = service.convert(amount, codes[from], codes[to]).unwrap();
        let back = service.convert(there, codes[to], codes[from]).unwrap();
        prop_assert!((back - amount).abs() <= amount * 1e-9);
    }

    #[test]
    fn unit_conversion_round_trip(
        value in 0.001f64..1_000_000.0,
        category in 0usize..4,
        i in 0usize..8,
        j in 0usize..8,
    ) {
        let category = [
            UnitCategory::Length,
            UnitCategory::Weight,
            UnitCategory::Volume,
            UnitCategory::Temperature,
        ][category];
        let table = units::units_for(category);
        let (from, to) = (table[i % table.len()].key, table[j % table.len()].key);
        let there = units::convert(category, from, to, value).unwrap();
        let back = units::convert(category, to, from, there).unwrap();
        // Table multipliers are rounded, so the round trip is only close
        prop_assert!((back - value).abs() <= value.abs().max(1.0) * 1e-4);
    }

    #[test]
    fn age_components_stay_in_range(birth in date(), target in date()) {
        let breakdown = calc::age(birth, target);
        if birth > target {
            prop_assert!(breakdown.is_none());
        } else {
            let b = breakdown.unwrap();
            prop_assert!(b.years >= 0);
            prop_assert!((0..12).contains(&b.months));
            prop_assert!((0..31).contains(&b.days));
            prop_assert_eq!(b.total_months, i64::from(b.years) * 12 + i64::from(b.months));
            prop_assert!(b.next_birthday >= target);
            prop_assert!(b.days_to_next_birthday < 367);
            prop_assert_eq!(b.next_birthday.month(), birth.month());
        }
    }

    #[test]
    fn day_shift_is_reversible(base in date(), days in 0i64..100_000) {
        let forward = calc::shift(base, 0, 0, days, Direction::Add).unwrap();
        prop_assert_eq!(calc::difference(base, forward).days, days);
        prop_assert_eq!(calc::shift(forward, 0, 0, days, Direction::Subtract), Some(base));
    }

    #[test]
    fn tip_total_is_bill_plus_tip(
        cents in 1u32..10_000_000,
        percent in 0u32..50,
        people in 1u32..20,
    ) {
        let bill = cents as f64 / 100.0;
        let split = calc::tip(Some(bill), TipRate::Custom(percent as f64), Some(people)).unwrap();
        prop_assert!((split.total_amount - (bill + split.tip_amount)).abs() < 0.011);
        prop_assert!(split.per_person * people as f64 >= split.total_amount - 0.01 * people as f64);
    }
}
