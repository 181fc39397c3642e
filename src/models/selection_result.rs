//! Result of reducing a candidate range to chargeable days.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayPart;

/// The chargeable outcome of a leave selection.
///
/// Recomputed from scratch on every input change and never persisted.
/// `normalized_start` and `normalized_end` are the first and last
/// *chargeable* days, which may sit inside the picked range when it begins
/// or ends on a non-working day.
///
/// # Example
///
/// ```
/// use holiday_engine::models::SelectionResult;
/// use rust_decimal::Decimal;
///
/// let empty = SelectionResult::empty();
/// assert!(!empty.has_selection);
/// assert_eq!(empty.effective_days, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Whether the range contains at least one chargeable day.
    pub has_selection: bool,
    /// First chargeable day.
    pub normalized_start: Option<NaiveDate>,
    /// Last chargeable day.
    pub normalized_end: Option<NaiveDate>,
    /// Number of contracted working days that are not public holidays.
    pub working_day_count: u32,
    /// Chargeable total after half-day weighting.
    pub effective_days: Decimal,
    /// Part requested on the first chargeable day.
    pub start_part: DayPart,
    /// Part requested on the last chargeable day.
    pub end_part: DayPart,
}

impl SelectionResult {
    /// A result with nothing selected.
    pub fn empty() -> Self {
        Self {
            has_selection: false,
            normalized_start: None,
            normalized_end: None,
            working_day_count: 0,
            effective_days: Decimal::ZERO,
            start_part: DayPart::FullDay,
            end_part: DayPart::FullDay,
        }
    }

    /// Returns true if the selection covers exactly one chargeable day.
    pub fn is_single_day(&self) -> bool {
        self.has_selection && self.normalized_start == self.normalized_end
    }
}

impl Default for SelectionResult {
    fn default() -> Self {
        Self::empty()
    }
}
