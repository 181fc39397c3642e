//! Request types for the Holiday Entitlement Engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DayPart, EntitlementRecord};

/// Request body for the `/selection` endpoint.
///
/// Dates are raw strings in either `DD/MM/YYYY` or ISO form. The holiday
/// year is taken from `holiday_year` when given, otherwise from the year
/// containing `today`, otherwise from the year containing the server date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// Label of the holiday year to book against.
    #[serde(default)]
    pub holiday_year: Option<i32>,
    /// The caller's notion of today, used to derive the holiday year.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// First picked day.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last picked day.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Part of the first day requested.
    #[serde(default)]
    pub start_part: DayPart,
    /// Part of the last day requested.
    #[serde(default)]
    pub end_part: DayPart,
    /// Leave type code or name; the policy default when absent.
    #[serde(default)]
    pub leave_type: Option<String>,
    /// The employee's entitlement record from the HR API.
    #[serde(default)]
    pub entitlement: EntitlementRecord,
}

/// Request body for the `/submission` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// The selection being submitted.
    #[serde(flatten)]
    pub selection: SelectionRequest,
    /// Employee making the request.
    pub employee_id: String,
    /// Free-text note for the approver.
    #[serde(default)]
    pub note: Option<String>,
}

/// Request body for the `/history` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// Raw history records as returned by the HR API.
    pub records: Vec<serde_json::Value>,
}

/// Request body for the `/calendar` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarRequest {
    /// Calendar year of the month to show.
    pub year: i32,
    /// Month to show (1-12).
    pub month: u32,
    /// Label of the holiday year; derived from `today` when absent.
    #[serde(default)]
    pub holiday_year: Option<i32>,
    /// The caller's notion of today.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// The employee's entitlement record from the HR API.
    #[serde(default)]
    pub entitlement: EntitlementRecord,
}
