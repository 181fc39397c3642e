//! Sets of calendar dates (booked leave, public holidays).

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_flexible_date;

/// A set of calendar dates compared by year, month and day only.
///
/// Built from the raw date strings of the HR API. Strings that cannot be
/// parsed are dropped, so the same day written as `05/03/2025` and
/// `2025-03-05` collapses to one entry.
///
/// # Example
///
/// ```
/// use holiday_engine::models::DateSet;
/// use chrono::NaiveDate;
///
/// let set = DateSet::from_raw(["25/12/2024", "2024-12-25", "not a date"]);
/// assert_eq!(set.len(), 1);
/// assert!(set.contains(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateSet {
    dates: BTreeSet<NaiveDate>,
}

impl DateSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every raw string and keeps the ones that are valid dates.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter()
            .filter_map(|s| parse_flexible_date(s.as_ref()))
            .collect()
    }

    /// Adds a date, returning false if it was already present.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Returns true if the set holds the given calendar day.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates the dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<NaiveDate> for DateSet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
