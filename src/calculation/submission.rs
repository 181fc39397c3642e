//! Submission payload construction.

use crate::error::{EngineError, EngineResult};
use crate::models::{SelectionResult, SubmissionDetails, SubmissionPayload};

use super::format_dmy;

/// Maps a computed selection and request details to the HR API payload.
///
/// Pure: the network call belongs to the caller. The balance is not checked
/// here, so an overdrawn request still produces a payload.
///
/// # Errors
///
/// Returns [`EngineError::EmptySelection`] when the selection has no
/// chargeable days.
///
/// # Example
///
/// ```
/// use holiday_engine::calculation::{build_submission_payload, compute_selection};
/// use holiday_engine::models::{CandidateRange, DateSet, DayPart, SubmissionDetails, WorkingPattern};
/// use chrono::NaiveDate;
///
/// let range = CandidateRange::new(
///     NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
/// )
/// .with_parts(DayPart::Morning, DayPart::FullDay);
/// let selection = compute_selection(Some(&range), &WorkingPattern::default(), &DateSet::new());
///
/// let details = SubmissionDetails {
///     leave_type: "Annual Leave".to_string(),
///     notes: None,
///     holiday_year: 2025,
///     employee_id: "emp_001".to_string(),
///     portal_id: "portal_01".to_string(),
/// };
///
/// let payload = build_submission_payload(&selection, &details).unwrap();
/// assert_eq!(payload.start_date, "10/03/2025");
/// assert_eq!(payload.start_day_part.code(), "AM");
/// ```
pub fn build_submission_payload(
    selection: &SelectionResult,
    details: &SubmissionDetails,
) -> EngineResult<SubmissionPayload> {
    let (Some(start), Some(end)) = (selection.normalized_start, selection.normalized_end) else {
        return Err(EngineError::EmptySelection);
    };
    if !selection.has_selection {
        return Err(EngineError::EmptySelection);
    }

    let note = details
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    Ok(SubmissionPayload {
        start_date: format_dmy(start),
        end_date: format_dmy(end),
        holiday_year: details.holiday_year,
        leave_type: details.leave_type.clone(),
        employee_id: details.employee_id.clone(),
        portal_id: details.portal_id.clone(),
        note,
        start_day_part: selection.start_part,
        end_day_part: selection.end_part,
        duration_days: selection.effective_days,
    })
}
