//! Leave history ingestion.
//!
//! History records from the HR API use several names for the same field
//! depending on which endpoint produced them. All fallback chains live here
//! so the rest of the engine only sees [`HistoryEntry`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient::{decimal_from_value, text_from_value};
use crate::calculation::parse_flexible_date;

/// Leave type assumed when a record names none.
pub const DEFAULT_HOLIDAY_TYPE: &str = "Annual Leave";

/// Status assumed when a record names none.
pub const DEFAULT_REQUEST_STATUS: &str = "Pending";

const START_KEYS: [&str; 4] = ["start_date", "date_from", "from", "date"];
const END_KEYS: [&str; 4] = ["end_date", "date_till", "till", "date"];
const TYPE_KEYS: [&str; 2] = ["holiday_type", "type"];
const STATUS_KEYS: [&str; 2] = ["request_status", "status"];

/// A normalized leave history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// First day of the booked leave.
    pub start_date: NaiveDate,
    /// Last day of the booked leave.
    pub end_date: NaiveDate,
    /// Days charged for the booking.
    pub days: Decimal,
    /// Leave type, e.g. "Annual Leave".
    pub holiday_type: String,
    /// Request status, e.g. "Approved".
    pub request_status: String,
}

/// Returns the first non-blank value among `keys`, in order.
fn first_present(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(key))
        .find_map(text_from_value)
}

/// Normalizes one raw history record.
///
/// Returns `None` when the start or end date is missing or unparseable; such
/// records are excluded from history views rather than reported as errors.
///
/// # Example
///
/// ```
/// use holiday_engine::models::normalize_history_record;
/// use serde_json::json;
///
/// let entry = normalize_history_record(&json!({
///     "date_from": "06/01/2025",
///     "date_till": "10/01/2025",
///     "days": "5",
///     "status": "Approved"
/// }))
/// .unwrap();
///
/// assert_eq!(entry.holiday_type, "Annual Leave");
/// assert_eq!(entry.request_status, "Approved");
/// ```
pub fn normalize_history_record(record: &Value) -> Option<HistoryEntry> {
    let start_date = first_present(record, &START_KEYS).and_then(|s| parse_flexible_date(&s))?;
    let end_date = first_present(record, &END_KEYS).and_then(|s| parse_flexible_date(&s))?;

    let days = record
        .get("days")
        .and_then(|v| text_from_value(v).map(|_| decimal_from_value(v)))
        .filter(|d| !d.is_zero())
        .unwrap_or(Decimal::ONE);

    Some(HistoryEntry {
        start_date,
        end_date,
        days,
        holiday_type: first_present(record, &TYPE_KEYS)
            .unwrap_or_else(|| DEFAULT_HOLIDAY_TYPE.to_string()),
        request_status: first_present(record, &STATUS_KEYS)
            .unwrap_or_else(|| DEFAULT_REQUEST_STATUS.to_string()),
    })
}

/// Normalizes a batch of raw history records, dropping unusable ones.
pub fn normalize_history(records: &[Value]) -> Vec<HistoryEntry> {
    records.iter().filter_map(normalize_history_record).collect()
}
