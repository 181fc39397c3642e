//! Interactive leave selection state.
//!
//! [`LeaveSelection`] tracks what a user has picked so far and which half-day
//! parts they chose. It moves between these phases:
//!
//! ```text
//! Idle ──pick one date──▶ Selecting ──pick both──▶ Validated
//!                                      └─────────▶ Rejected
//! ```
//!
//! A rejected pick never replaces the range already applied.

use chrono::NaiveDate;

use crate::models::{
    CandidateRange, DateSet, DayPart, HolidayYear, SelectionResult, WorkingPattern,
};

use super::{RangeValidation, RejectionReason, compute_selection, validate_range};

/// Where a selection currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Nothing picked.
    #[default]
    Idle,
    /// One endpoint picked, waiting for the other.
    Selecting {
        /// The endpoint picked so far.
        anchor: NaiveDate,
    },
    /// The applied range passed validation.
    Validated,
    /// The latest pick was refused; the previous range stays applied.
    Rejected(RejectionReason),
}

/// A user's in-progress leave selection.
///
/// # Example
///
/// ```
/// use holiday_engine::calculation::{LeaveSelection, SelectionPhase};
/// use holiday_engine::models::{DateSet, DayPart, HolidayYear, HolidayYearBoundary, WorkingPattern};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let year = HolidayYear::for_year(2025, &HolidayYearBoundary::default()).unwrap();
/// let pattern = WorkingPattern::default();
/// let date = |d| NaiveDate::from_ymd_opt(2025, 3, d);
///
/// let mut selection = LeaveSelection::new();
/// selection.pick(date(10), date(14), &year, &pattern);
/// selection.set_start_part(DayPart::Afternoon);
/// assert_eq!(selection.phase(), SelectionPhase::Validated);
///
/// let result = selection.compute(&pattern, &DateSet::new());
/// assert_eq!(result.effective_days, Decimal::new(45, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveSelection {
    phase: SelectionPhase,
    range: Option<CandidateRange>,
}

impl LeaveSelection {
    /// Creates an idle selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current phase.
    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// The range currently applied, if any.
    pub fn range(&self) -> Option<&CandidateRange> {
        self.range.as_ref()
    }

    /// Applies a new pick of endpoints.
    ///
    /// On a valid range whose start differs from the applied range's start,
    /// both half-day parts reset to full day. A rejected range leaves the
    /// applied range and parts untouched.
    pub fn pick(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        holiday_year: &HolidayYear,
        pattern: &WorkingPattern,
    ) -> RangeValidation {
        let outcome = validate_range(start, end, holiday_year, pattern);

        match outcome {
            RangeValidation::NoSelection => {
                self.phase = match start.or(end) {
                    Some(anchor) => SelectionPhase::Selecting { anchor },
                    None => {
                        self.range = None;
                        SelectionPhase::Idle
                    }
                };
            }
            RangeValidation::Rejected(reason) => {
                self.phase = SelectionPhase::Rejected(reason);
            }
            RangeValidation::Valid { start, end } => {
                let (start_part, end_part) = match self.range {
                    Some(previous) if previous.start == start => {
                        (previous.start_part, previous.end_part)
                    }
                    _ => (DayPart::FullDay, DayPart::FullDay),
                };
                self.range = Some(CandidateRange::new(start, end).with_parts(start_part, end_part));
                self.phase = SelectionPhase::Validated;
            }
        }

        outcome
    }

    /// Sets the part of the first day. Returns false if no range is applied.
    pub fn set_start_part(&mut self, part: DayPart) -> bool {
        match self.range.as_mut() {
            Some(range) => {
                range.start_part = part;
                true
            }
            None => false,
        }
    }

    /// Sets the part of the last day. Returns false if no range is applied.
    pub fn set_end_part(&mut self, part: DayPart) -> bool {
        match self.range.as_mut() {
            Some(range) => {
                range.end_part = part;
                true
            }
            None => false,
        }
    }

    /// Drops the applied range and returns to idle.
    pub fn clear(&mut self) {
        self.phase = SelectionPhase::Idle;
        self.range = None;
    }

    /// Computes the chargeable outcome of the applied range.
    pub fn compute(&self, pattern: &WorkingPattern, public_holidays: &DateSet) -> SelectionResult {
        compute_selection(self.range.as_ref(), pattern, public_holidays)
    }
}
