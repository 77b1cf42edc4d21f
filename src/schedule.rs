//! Due-date computation for recurring funds.
//!
//! Month arithmetic overflows the way a calendar-add on a host date does:
//! the day-of-month is kept and any excess days roll into the following
//! month, so Jan 31 + 1 month is Mar 2 (leap year) or Mar 3.

use chrono::{Datelike, Days, NaiveDate};

use crate::model::Frequency;

/// Next due date for a fund with `frequency`, counted from `reference`.
/// An unset or unrecognized frequency leaves the reference date unchanged.
pub fn next_due_date(frequency: Option<Frequency>, reference: NaiveDate) -> NaiveDate {
    match frequency {
        Some(f) => add_months_overflowing(reference, f.months()),
        None => reference,
    }
}

/// Adds calendar months keeping the day-of-month and spilling days that do
/// not exist in the target month over into the next one.
pub fn add_months_overflowing(date: NaiveDate, months: u32) -> NaiveDate {
    let total = date.year() as i64 * 12 + date.month0() as i64 + months as i64;
    let year = total.div_euclid(12) as i32;
    let month = total.rem_euclid(12) as u32 + 1;

    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return date,
    };
    first
        .checked_add_days(Days::new(date.day0() as u64))
        .unwrap_or(date)
}
