//! Holiday year (fiscal leave cycle) model.
//!
//! A holiday year is labelled by the calendar year in which it ends. With the
//! default boundary of 1 December, holiday year 2025 runs from 1 December 2024
//! to 30 November 2025.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The month and day on which every holiday year starts.
///
/// # Example
///
/// ```
/// use holiday_engine::models::HolidayYearBoundary;
///
/// let boundary = HolidayYearBoundary::default();
/// assert_eq!((boundary.start_month, boundary.start_day), (12, 1));
/// assert!(boundary.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayYearBoundary {
    /// Month the holiday year starts in (1-12).
    pub start_month: u32,
    /// Day of the month the holiday year starts on.
    pub start_day: u32,
}

impl Default for HolidayYearBoundary {
    fn default() -> Self {
        Self {
            start_month: 12,
            start_day: 1,
        }
    }
}

impl HolidayYearBoundary {
    /// Checks that the boundary names a day that exists in every year.
    ///
    /// 29 February is rejected because it does not exist in most years.
    pub fn validate(&self) -> EngineResult<()> {
        // 2001 is not a leap year
        if NaiveDate::from_ymd_opt(2001, self.start_month, self.start_day).is_none() {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "holiday year boundary {:02}-{:02} is not a valid day in every year",
                    self.start_month, self.start_day
                ),
            });
        }
        Ok(())
    }

    fn starts_on_new_year(&self) -> bool {
        self.start_month == 1 && self.start_day == 1
    }

    /// First day of the holiday year labelled `year`.
    fn start_of(&self, year: i32) -> Option<NaiveDate> {
        if self.starts_on_new_year() {
            NaiveDate::from_ymd_opt(year, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year.checked_sub(1)?, self.start_month, self.start_day)
        }
    }
}

/// One holiday year with its inclusive date bounds.
///
/// # Example
///
/// ```
/// use holiday_engine::models::{HolidayYear, HolidayYearBoundary};
/// use chrono::NaiveDate;
///
/// let year = HolidayYear::for_year(2025, &HolidayYearBoundary::default()).unwrap();
/// assert_eq!(year.start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
/// assert_eq!(year.end, NaiveDate::from_ymd_opt(2025, 11, 30).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayYear {
    /// The label of the holiday year (the calendar year it ends in).
    pub year: i32,
    /// First day of the holiday year (inclusive).
    pub start: NaiveDate,
    /// Last day of the holiday year (inclusive).
    pub end: NaiveDate,
}

impl HolidayYear {
    /// Builds the holiday year labelled `year` for the given boundary.
    pub fn for_year(year: i32, boundary: &HolidayYearBoundary) -> EngineResult<Self> {
        boundary.validate()?;
        let out_of_range = || EngineError::InvalidConfig {
            message: format!("holiday year {} is outside the supported date range", year),
        };

        let start = boundary.start_of(year).ok_or_else(out_of_range)?;
        let end = year
            .checked_add(1)
            .and_then(|next| boundary.start_of(next))
            .and_then(|next| next.pred_opt())
            .ok_or_else(out_of_range)?;

        Ok(Self { year, start, end })
    }

    /// Finds the holiday year that contains `date`.
    ///
    /// Used to derive the current holiday year from an injected "today".
    pub fn containing(date: NaiveDate, boundary: &HolidayYearBoundary) -> EngineResult<Self> {
        boundary.validate()?;
        let on_or_after_boundary =
            (date.month(), date.day()) >= (boundary.start_month, boundary.start_day);
        let year = if !boundary.starts_on_new_year() && on_or_after_boundary {
            date.year() + 1
        } else {
            date.year()
        };
        Self::for_year(year, boundary)
    }

    /// Returns true if `date` lies inside the holiday year (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns true if the whole of `[start, end]` lies inside the year.
    pub fn contains_range(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.contains(start) && self.contains(end)
    }
}
