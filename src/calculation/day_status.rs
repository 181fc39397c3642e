//! Day classification for calendar highlighting.
//!
//! A booking calendar shades each day by what it means for the employee.
//! Booked dates only matter here; they never feed the balance arithmetic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DateSet, HolidayYear, WorkingPattern};

use super::{is_booked, is_public_holiday, is_working_day};

/// How a calendar day should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// The day lies outside the holiday year and cannot be booked.
    OutsideHolidayYear,
    /// A public or mandatory holiday.
    PublicHoliday,
    /// Already covered by approved or pending leave.
    Booked,
    /// Not a contracted working day.
    NonWorking,
    /// A bookable working day.
    Working,
}

/// Everything needed to classify a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarContext {
    /// The holiday year being displayed.
    pub holiday_year: HolidayYear,
    /// Contracted working days.
    pub pattern: WorkingPattern,
    /// Dates already booked.
    pub booked: DateSet,
    /// Public and mandatory holidays.
    pub public_holidays: DateSet,
}

/// A day of a month view with its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// How the date should be presented.
    pub status: DayStatus,
}

/// Classifies a day. Checks run in the order of the [`DayStatus`] variants
/// and the first match wins.
pub fn classify_day(date: NaiveDate, context: &CalendarContext) -> DayStatus {
    if !context.holiday_year.contains(date) {
        DayStatus::OutsideHolidayYear
    } else if is_public_holiday(date, &context.public_holidays) {
        DayStatus::PublicHoliday
    } else if is_booked(date, &context.booked) {
        DayStatus::Booked
    } else if !is_working_day(date, &context.pattern) {
        DayStatus::NonWorking
    } else {
        DayStatus::Working
    }
}

/// Classifies every day of a month. An invalid month yields no days.
///
/// # Example
///
/// ```
/// use holiday_engine::calculation::{month_calendar, CalendarContext, DayStatus};
/// use holiday_engine::models::{DateSet, HolidayYear, HolidayYearBoundary, WorkingPattern};
///
/// let context = CalendarContext {
///     holiday_year: HolidayYear::for_year(2025, &HolidayYearBoundary::default()).unwrap(),
///     pattern: WorkingPattern::default(),
///     booked: DateSet::new(),
///     public_holidays: DateSet::from_raw(["25/12/2024"]),
/// };
///
/// let december = month_calendar(2024, 12, &context);
/// assert_eq!(december.len(), 31);
/// assert_eq!(december[24].status, DayStatus::PublicHoliday);
/// ```
pub fn month_calendar(year: i32, month: u32, context: &CalendarContext) -> Vec<CalendarDay> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|date| chrono::Datelike::month(date) == month)
        .map(|date| CalendarDay {
            date,
            status: classify_day(date, context),
        })
        .collect()
}
