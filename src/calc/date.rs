use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateDifference {
    pub days: i64,
    pub weeks: i64,
    pub months: i64,
    pub years: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Add,
    Subtract,
}

/// Distance between two dates, in either order.
///
/// Months and years are approximations (30.44 and 365.25 days).
pub fn difference(start: NaiveDate, end: NaiveDate) -> DateDifference {
    let days = (end - start).num_days().abs();
    DateDifference {
        days,
        weeks: days / 7,
        months: (days as f64 / 30.44).floor() as i64,
        years: (days as f64 / 365.25).floor() as i64,
    }
}

/// Move `base` by years, then months, then days.
///
/// Each step rolls an out-of-range day forward into the next month, so
/// Jan 31 plus one month is Mar 3 (or Mar 2 in a leap year). `None` when
/// the result leaves the representable calendar.
pub fn shift(
    base: NaiveDate,
    years: i64,
    months: i64,
    days: i64,
    direction: Direction,
) -> Option<NaiveDate> {
    let sign = match direction {
        Direction::Add => 1,
        Direction::Subtract => -1,
    };

    let year = i64::from(base.year()).checked_add(years.checked_mul(sign)?)?;
    let shifted = rolled_date(year, i64::from(base.month0()), i64::from(base.day()))?;

    let month0 = i64::from(shifted.month0()).checked_add(months.checked_mul(sign)?)?;
    let shifted = rolled_date(i64::from(shifted.year()), month0, i64::from(shifted.day()))?;

    shifted.checked_add_signed(TimeDelta::try_days(days.checked_mul(sign)?)?)
}

/// Build a date from components that may overflow their ranges.
///
/// `month0` outside 0..12 carries into the year; `day` outside the month
/// carries into neighbouring months (day 0 is the previous month's last day).
pub(crate) fn rolled_date(year: i64, month0: i64, day: i64) -> Option<NaiveDate> {
    let year = year.checked_add(month0.div_euclid(12))?;
    let month = month0.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
    first.checked_add_signed(TimeDelta::try_days(day - 1)?)
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(31)
}
