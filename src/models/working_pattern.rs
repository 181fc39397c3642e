//! Contracted weekly working pattern.

use std::collections::BTreeSet;

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

/// The set of weekdays an employee is contracted to work.
///
/// Days are identified as 1 = Monday through 7 = Sunday, matching the
/// `day_id` values of the HR API. Identifiers outside that range are
/// dropped on construction. An empty pattern is allowed and means no day is
/// a working day.
///
/// # Example
///
/// ```
/// use holiday_engine::models::WorkingPattern;
/// use chrono::Weekday;
///
/// let pattern = WorkingPattern::default();
/// assert!(pattern.contains_weekday(Weekday::Fri));
/// assert!(!pattern.contains_weekday(Weekday::Sat));
///
/// let part_time = WorkingPattern::from_day_ids([1, 3, 9]);
/// assert_eq!(part_time.day_ids(), vec![1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u8>", into = "Vec<u8>")]
pub struct WorkingPattern {
    days: BTreeSet<u8>,
}

impl WorkingPattern {
    /// Builds a pattern from `day_id` values, ignoring anything outside 1..=7.
    pub fn from_day_ids<I: IntoIterator<Item = u8>>(ids: I) -> Self {
        Self {
            days: ids.into_iter().filter(|id| (1..=7).contains(id)).collect(),
        }
    }

    /// A pattern with no working days.
    pub fn empty() -> Self {
        Self {
            days: BTreeSet::new(),
        }
    }

    /// Returns true if the given `day_id` (1 = Monday) is a working day.
    pub fn contains(&self, day_id: u8) -> bool {
        self.days.contains(&day_id)
    }

    /// Returns true if the weekday is a working day.
    pub fn contains_weekday(&self, weekday: Weekday) -> bool {
        self.contains(weekday.number_from_monday() as u8)
    }

    /// Returns true if the date falls on a contracted working day.
    pub fn is_working_date(&self, date: chrono::NaiveDate) -> bool {
        self.contains_weekday(date.weekday())
    }

    /// Returns true if no day is a working day.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of working days per week.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// The working `day_id` values in ascending order.
    pub fn day_ids(&self) -> Vec<u8> {
        self.days.iter().copied().collect()
    }
}

impl Default for WorkingPattern {
    /// Monday to Friday.
    fn default() -> Self {
        Self::from_day_ids(1..=5)
    }
}

impl From<Vec<u8>> for WorkingPattern {
    fn from(ids: Vec<u8>) -> Self {
        Self::from_day_ids(ids)
    }
}

impl From<WorkingPattern> for Vec<u8> {
    fn from(pattern: WorkingPattern) -> Self {
        pattern.day_ids()
    }
}
