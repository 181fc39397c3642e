//! Candidate leave range model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DayPart;

/// A date range a user is considering booking, with half-day parts.
///
/// The range is always ordered: [`CandidateRange::new`] swaps the endpoints
/// when they are given end-first.
///
/// # Example
///
/// ```
/// use holiday_engine::models::{CandidateRange, DayPart};
/// use chrono::NaiveDate;
///
/// let later = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let earlier = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
///
/// let range = CandidateRange::new(later, earlier).with_parts(DayPart::Afternoon, DayPart::FullDay);
/// assert_eq!(range.start, earlier);
/// assert_eq!(range.end, later);
/// assert_eq!(range.days().count(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRange {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
    /// Part of the first chargeable day being requested.
    #[serde(default)]
    pub start_part: DayPart,
    /// Part of the last chargeable day being requested.
    #[serde(default)]
    pub end_part: DayPart,
}

impl CandidateRange {
    /// Creates a full-day range, swapping the endpoints if needed.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start,
            end,
            start_part: DayPart::FullDay,
            end_part: DayPart::FullDay,
        }
    }

    /// Returns the range with the given half-day parts.
    pub fn with_parts(mut self, start_part: DayPart, end_part: DayPart) -> Self {
        self.start_part = start_part;
        self.end_part = end_part;
        self
    }

    /// Returns true if `date` lies in the range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates every calendar day in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}
