//! Working-day, public-holiday and booked-day predicates.

use chrono::{Datelike, NaiveDate};

use crate::models::{DateSet, WorkingPattern};

/// Maps a date to its `day_id`, 1 = Monday through 7 = Sunday.
///
/// # Example
///
/// ```
/// use holiday_engine::calculation::weekday_id;
/// use chrono::NaiveDate;
///
/// // 2025-01-05 is a Sunday
/// assert_eq!(weekday_id(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()), 7);
/// assert_eq!(weekday_id(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()), 1);
/// ```
pub fn weekday_id(date: NaiveDate) -> u8 {
    // number_from_monday is 1..=7, so the cast is lossless
    date.weekday().number_from_monday() as u8
}

/// Returns true if `date` falls on a day of the contracted pattern.
///
/// An empty pattern has no working days.
pub fn is_working_day(date: NaiveDate, pattern: &WorkingPattern) -> bool {
    pattern.is_working_date(date)
}

/// Returns true if `date` is a public or mandatory holiday.
pub fn is_public_holiday(date: NaiveDate, public_holidays: &DateSet) -> bool {
    public_holidays.contains(date)
}

/// Returns true if `date` is already consumed by booked leave.
pub fn is_booked(date: NaiveDate, booked: &DateSet) -> bool {
    booked.contains(date)
}
