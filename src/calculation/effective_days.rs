//! Reduction of a candidate range to chargeable days.
//!
//! Every calendar day in the range is enumerated, non-working days and public
//! holidays are dropped, and what remains is charged as full days except for
//! the first and last, which carry the requested half-day parts. A range that
//! reduces to one day is charged by its start part alone.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{CandidateRange, DateSet, SelectionResult, WorkingPattern};

use super::{is_public_holiday, is_working_day};

/// Returns the days of `range` that count against the leave balance.
///
/// A day counts when it is a contracted working day and not a public
/// holiday.
pub fn chargeable_days(
    range: &CandidateRange,
    pattern: &WorkingPattern,
    public_holidays: &DateSet,
) -> Vec<NaiveDate> {
    range
        .days()
        .filter(|day| is_working_day(*day, pattern))
        .filter(|day| !is_public_holiday(*day, public_holidays))
        .collect()
}

/// Computes the chargeable outcome of a candidate range.
///
/// # Behavior
///
/// - No range, or a range with no chargeable days, gives an empty result
/// - A single chargeable day is charged at the weight of `start_part`
/// - Otherwise the first and last days are charged at the weight of their
///   parts and every day between them counts as one
///
/// # Example
///
/// ```
/// use holiday_engine::calculation::compute_selection;
/// use holiday_engine::models::{CandidateRange, DateSet, DayPart, WorkingPattern};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Monday 10th to Sunday 23rd March 2025: two working weeks
/// let range = CandidateRange::new(
///     NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 23).unwrap(),
/// )
/// .with_parts(DayPart::Afternoon, DayPart::Morning);
///
/// let result = compute_selection(Some(&range), &WorkingPattern::default(), &DateSet::new());
/// assert_eq!(result.working_day_count, 10);
/// assert_eq!(result.effective_days, Decimal::new(9, 0));
/// assert_eq!(result.normalized_end, NaiveDate::from_ymd_opt(2025, 3, 21));
/// ```
pub fn compute_selection(
    range: Option<&CandidateRange>,
    pattern: &WorkingPattern,
    public_holidays: &DateSet,
) -> SelectionResult {
    let Some(range) = range else {
        return SelectionResult::empty();
    };

    let days = chargeable_days(range, pattern, public_holidays);
    let (Some(&first), Some(&last)) = (days.first(), days.last()) else {
        return SelectionResult::empty();
    };

    let effective_days = if first == last {
        range.start_part.weight()
    } else {
        let middle = days.len().saturating_sub(2);
        range.start_part.weight() + Decimal::from(middle as u64) + range.end_part.weight()
    };

    SelectionResult {
        has_selection: true,
        normalized_start: Some(first),
        normalized_end: Some(last),
        working_day_count: u32::try_from(days.len()).unwrap_or(u32::MAX),
        effective_days,
        start_part: range.start_part,
        // A single day has one part.
        end_part: if first == last {
            range.start_part
        } else {
            range.end_part
        },
    }
}
