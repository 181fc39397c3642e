//! Entitlement record as supplied by the HR API.
//!
//! The record is the source of an employee's working pattern, their booked
//! and public holiday dates, and the balance figures. Numeric fields arrive
//! as strings or numbers and are coerced leniently.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient::{
    deserialize_day_id, deserialize_decimal, deserialize_optional_text, deserialize_string_list,
};
use super::{DateSet, WorkingPattern};

/// One contracted working day from the `workhours` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHours {
    /// Day identifier, 1 = Monday through 7 = Sunday.
    #[serde(default, deserialize_with = "deserialize_day_id")]
    pub day_id: Option<u8>,
}

/// An employee's holiday entitlement for one holiday year.
///
/// # Example
///
/// ```
/// use holiday_engine::models::EntitlementRecord;
/// use rust_decimal::Decimal;
///
/// let json = r#"{
///     "workhours": [{"day_id": 1}, {"day_id": "3"}],
///     "holiday_dates": ["06/01/2025"],
///     "public_and_xmas_holiday_dates": ["2024-12-25", "26/12/2024"],
///     "remaining_holiday": "12.5"
/// }"#;
///
/// let record: EntitlementRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.working_pattern().day_ids(), vec![1, 3]);
/// assert_eq!(record.public_holidays().len(), 2);
/// assert_eq!(record.remaining_holiday, Decimal::new(125, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementRecord {
    /// Contracted working days.
    #[serde(default, deserialize_with = "deserialize_workhours")]
    pub workhours: Vec<WorkHours>,
    /// Dates already consumed by approved or pending leave.
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub holiday_dates: Vec<String>,
    /// Public and mandatory (Christmas shutdown) holiday dates.
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub public_and_xmas_holiday_dates: Vec<String>,
    /// Annual entitlement in days.
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub holiday_entitlement: Decimal,
    /// Days already booked this year.
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub total_booked_holiday: Decimal,
    /// Days reserved for the mandatory Christmas shutdown.
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub total_mandatory_xmas_holiday: Decimal,
    /// Days carried forward from the previous holiday year.
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub holiday_balance_carried_forward: Decimal,
    /// Days still available to book.
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub remaining_holiday: Decimal,
    /// Display string for the start of the cycle.
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub holiday_cycle_start: Option<String>,
    /// Display string for the end of the cycle.
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub holiday_cycle_end: Option<String>,
}

impl EntitlementRecord {
    /// The contracted working pattern, falling back to `fallback` when the
    /// record lists no valid working days.
    pub fn working_pattern_or(&self, fallback: &WorkingPattern) -> WorkingPattern {
        let pattern = WorkingPattern::from_day_ids(self.workhours.iter().filter_map(|w| w.day_id));
        if pattern.is_empty() {
            fallback.clone()
        } else {
            pattern
        }
    }

    /// The contracted working pattern, Monday to Friday when absent.
    pub fn working_pattern(&self) -> WorkingPattern {
        self.working_pattern_or(&WorkingPattern::default())
    }

    /// Dates already booked, for highlighting.
    pub fn booked_dates(&self) -> DateSet {
        DateSet::from_raw(&self.holiday_dates)
    }

    /// Public and mandatory holidays, never charged against the balance.
    pub fn public_holidays(&self) -> DateSet {
        DateSet::from_raw(&self.public_and_xmas_holiday_dates)
    }
}

fn deserialize_workhours<'de, D>(deserializer: D) -> Result<Vec<WorkHours>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<WorkHours>>::deserialize(deserializer)?.unwrap_or_default())
}
