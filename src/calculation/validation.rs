//! Candidate range validation against booking policy.
//!
//! Rules are checked in order and the first failure wins:
//!
//! 1. Both endpoints are required, otherwise there is no selection yet.
//! 2. Endpoints picked end-first are swapped.
//! 3. The whole range must lie inside the holiday year.
//! 4. Both endpoints must be contracted working days. Non-working days
//!    strictly inside the range are allowed and simply not charged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{HolidayYear, WorkingPattern};

use super::is_working_day;

/// Why a candidate range was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Part of the range falls outside the holiday year.
    OutsideHolidayYear,
    /// The start or end day is not a contracted working day.
    NonWorkingDay,
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::OutsideHolidayYear => write!(f, "Outside holiday year"),
            RejectionReason::NonWorkingDay => write!(f, "Non-working day selected"),
        }
    }
}

/// Outcome of validating a candidate range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeValidation {
    /// One or both endpoints are missing. Neutral, not an error.
    NoSelection,
    /// The range passed every rule. Endpoints are ordered.
    Valid {
        /// First day of the range.
        start: NaiveDate,
        /// Last day of the range.
        end: NaiveDate,
    },
    /// The range broke a rule and must not be applied.
    Rejected(RejectionReason),
}

impl RangeValidation {
    /// Returns true for [`RangeValidation::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, RangeValidation::Valid { .. })
    }

    /// The rejection reason, if the range was rejected.
    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            RangeValidation::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Validates a candidate range for booking.
///
/// # Example
///
/// ```
/// use holiday_engine::calculation::{validate_range, RangeValidation, RejectionReason};
/// use holiday_engine::models::{HolidayYear, HolidayYearBoundary, WorkingPattern};
/// use chrono::NaiveDate;
///
/// let year = HolidayYear::for_year(2025, &HolidayYearBoundary::default()).unwrap();
/// let pattern = WorkingPattern::default();
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
///
/// // Picked end-first: Friday 14th back to Monday 10th March
/// assert_eq!(
///     validate_range(date(2025, 3, 14), date(2025, 3, 10), &year, &pattern),
///     RangeValidation::Valid { start: date(2025, 3, 10).unwrap(), end: date(2025, 3, 14).unwrap() }
/// );
///
/// // Runs past 30 November
/// assert_eq!(
///     validate_range(date(2025, 11, 28), date(2025, 12, 2), &year, &pattern),
///     RangeValidation::Rejected(RejectionReason::OutsideHolidayYear)
/// );
///
/// assert_eq!(validate_range(date(2025, 3, 10), None, &year, &pattern), RangeValidation::NoSelection);
/// ```
pub fn validate_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    holiday_year: &HolidayYear,
    pattern: &WorkingPattern,
) -> RangeValidation {
    let (Some(a), Some(b)) = (start, end) else {
        return RangeValidation::NoSelection;
    };
    let (start, end) = if a <= b { (a, b) } else { (b, a) };

    if !holiday_year.contains_range(start, end) {
        return RangeValidation::Rejected(RejectionReason::OutsideHolidayYear);
    }

    if !is_working_day(start, pattern) || !is_working_day(end, pattern) {
        return RangeValidation::Rejected(RejectionReason::NonWorkingDay);
    }

    RangeValidation::Valid { start, end }
}
