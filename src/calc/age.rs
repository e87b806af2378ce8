use crate::calc::date::{days_in_month, rolled_date};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub total_days: i64,
    pub total_weeks: i64,
    pub total_months: i64,
    pub next_birthday: NaiveDate,
    pub days_to_next_birthday: i64,
}

/// Calendar age of someone born on `birth`, measured on `target`.
pub fn age(birth: NaiveDate, target: NaiveDate) -> Option<AgeBreakdown> {
    if birth > target {
        return None;
    }

    let mut years = target.year() - birth.year();
    let mut months = target.month() as i32 - birth.month() as i32;
    let mut days = target.day() as i32 - birth.day() as i32;

    // borrow whole months, walking back from the month before the target
    let (mut year, mut month) = (target.year(), target.month());
    while days < 0 {
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
        months -= 1;
        days += days_in_month(year, month) as i32;
    }
    while months < 0 {
        years -= 1;
        months += 12;
    }

    let total_days = (target - birth).num_days();

    let mut next_birthday = rolled_date(
        i64::from(target.year()),
        i64::from(birth.month0()),
        i64::from(birth.day()),
    )?;
    if next_birthday < target {
        next_birthday = rolled_date(
            i64::from(target.year()) + 1,
            i64::from(birth.month0()),
            i64::from(birth.day()),
        )?;
    }

    Some(AgeBreakdown {
        years,
        months,
        days,
        total_days,
        total_weeks: total_days / 7,
        total_months: i64::from(years) * 12 + i64::from(months),
        next_birthday,
        days_to_next_birthday: (next_birthday - target).num_days(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_day_birth() {
        let breakdown = age(ymd(2000, 2, 29), ymd(2024, 2, 28)).unwrap();
        assert_eq!((breakdown.years, breakdown.months, breakdown.days), (23, 11, 30));
        assert_eq!(breakdown.total_days, 8765);
        assert_eq!(breakdown.total_weeks, 1252);
        assert_eq!(breakdown.total_months, 287);
        assert_eq!(breakdown.next_birthday, ymd(2024, 2, 29));
        assert_eq!(breakdown.days_to_next_birthday, 1);
    }

    #[test]
    fn test_leap_day_birthday_rolls_to_march_in_common_year() {
        let breakdown = age(ymd(2000, 2, 29), ymd(2023, 1, 10)).unwrap();
        assert_eq!(breakdown.next_birthday, ymd(2023, 3, 1));
    }

    #[test]
    fn test_borrow_across_short_month() {
        let breakdown = age(ymd(2023, 1, 31), ymd(2023, 3, 1)).unwrap();
        assert_eq!((breakdown.years, breakdown.months, breakdown.days), (0, 0, 29));
    }

    #[test]
    fn test_birthday_today() {
        let breakdown = age(ymd(1990, 6, 15), ymd(2024, 6, 15)).unwrap();
        assert_eq!((breakdown.years, breakdown.months, breakdown.days), (34, 0, 0));
        assert_eq!(breakdown.next_birthday, ymd(2024, 6, 15));
        assert_eq!(breakdown.days_to_next_birthday, 0);
    }

    #[test]
    fn test_birthday_already_passed() {
        let breakdown = age(ymd(1990, 3, 1), ymd(2024, 6, 15)).unwrap();
        assert_eq!(breakdown.next_birthday, ymd(2025, 3, 1));
        assert_eq!(breakdown.days_to_next_birthday, 259);
    }

    #[test]
    fn test_future_birth_is_no_result() {
        assert!(age(ymd(2030, 1, 1), ymd(2024, 1, 1)).is_none());
    }
}
