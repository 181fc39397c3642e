//! Leave request submission payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayPart;

/// Request details supplied alongside a computed selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDetails {
    /// Leave type name, e.g. "Annual Leave".
    pub leave_type: String,
    /// Free-text note for the approver.
    #[serde(default)]
    pub notes: Option<String>,
    /// Label of the holiday year the leave is charged to.
    pub holiday_year: i32,
    /// Employee making the request.
    pub employee_id: String,
    /// Portal the request is raised from.
    pub portal_id: String,
}

/// The payload sent to the HR API to raise a leave request.
///
/// Dates are `DD/MM/YYYY`, day parts are `FD`/`AM`/`PM`, and
/// `duration_days` is a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    /// First chargeable day, `DD/MM/YYYY`.
    pub start_date: String,
    /// Last chargeable day, `DD/MM/YYYY`.
    pub end_date: String,
    /// Label of the holiday year.
    pub holiday_year: i32,
    /// Leave type name.
    #[serde(rename = "type")]
    pub leave_type: String,
    /// Employee making the request.
    pub employee_id: String,
    /// Portal the request is raised from.
    pub portal_id: String,
    /// Optional note; omitted when blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Part of the first day requested.
    pub start_day_part: DayPart,
    /// Part of the last day requested.
    pub end_day_part: DayPart,
    /// Effective days requested.
    #[serde(with = "rust_decimal::serde::float")]
    pub duration_days: Decimal,
}
