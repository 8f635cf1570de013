use chrono::{Datelike, NaiveDate};

/// Gregorian leap-year rule: divisible by 4, not by 100 unless by 400
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a calendar year (365 or 366)
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// January 1st of `year`, None outside chrono's supported range
pub fn year_start(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// December 31st of `year`, None outside chrono's supported range
pub fn year_end(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
}

/// Days between two dates, counting both boundary days
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Calendar months touched by `[start, end]`, counting both boundary months
pub fn months_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year() - start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    years * 12 + months + 1
}

/// Same month and day as `date` in `year`.
///
/// A February 29th anniversary falls on February 28th in common years.
pub fn anniversary_in_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
}
