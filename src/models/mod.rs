//! Core data models for the Holiday Entitlement Engine.
//!
//! This module contains the value types the calculator works on, plus the
//! ingestion records that mirror the external HR API.

mod candidate_range;
mod date_set;
mod day_part;
mod entitlement;
mod history;
mod holiday_year;
mod lenient;
mod selection_result;
mod submission;
mod working_pattern;

pub use candidate_range::CandidateRange;
pub use date_set::DateSet;
pub use day_part::DayPart;
pub use entitlement::{EntitlementRecord, WorkHours};
pub use history::{
    DEFAULT_HOLIDAY_TYPE, DEFAULT_REQUEST_STATUS, HistoryEntry, normalize_history,
    normalize_history_record,
};
pub use holiday_year::{HolidayYear, HolidayYearBoundary};
pub use selection_result::SelectionResult;
pub use submission::{SubmissionDetails, SubmissionPayload};
pub use working_pattern::WorkingPattern;
