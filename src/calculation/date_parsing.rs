//! Date normalization for the two formats the HR API emits.
//!
//! Dates arrive either as ISO 8601 (`2025-03-10`, `2025-03-10T09:00:00Z`) or
//! as `DD/MM/YYYY` tokens optionally followed by a time. Both normalize to a
//! timezone-naive [`NaiveDate`]. Parsing never fails loudly: anything that is
//! not a real calendar date yields `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::DateSet;

/// Parses an ISO 8601 or `DD/MM/YYYY` date string.
///
/// ISO forms are tried first. Otherwise the text before the first space is
/// split on `/` into exactly three numeric components (day, month, year).
/// A day that does not exist in the given month returns `None`.
///
/// # Example
///
/// ```
/// use holiday_engine::calculation::parse_flexible_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 3, 10);
/// assert_eq!(parse_flexible_date("10/03/2025"), expected);
/// assert_eq!(parse_flexible_date("10/03/2025 14:30"), expected);
/// assert_eq!(parse_flexible_date("2025-03-10"), expected);
/// assert_eq!(parse_flexible_date("2025-03-10T23:30:00+01:00"), expected);
/// assert_eq!(parse_flexible_date("31/02/2025"), None);
/// assert_eq!(parse_flexible_date("soon"), None);
/// ```
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    parse_iso(raw).or_else(|| parse_day_month_year(raw))
}

fn parse_iso(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // Offset-aware timestamps keep the calendar day as written.
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|datetime| datetime.date())
}

fn parse_day_month_year(raw: &str) -> Option<NaiveDate> {
    let token = raw.split_whitespace().next()?;
    let parts: Vec<&str> = token.split('/').collect();
    if parts.len() != 3
        || parts
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Formats a date as `DD/MM/YYYY`, the format the HR API expects.
///
/// # Example
///
/// ```
/// use holiday_engine::calculation::format_dmy;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
/// assert_eq!(format_dmy(date), "07/03/2025");
/// ```
pub fn format_dmy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parses a list of raw date strings into a [`DateSet`], dropping garbage.
pub fn parse_date_list<I, S>(raw: I) -> DateSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DateSet::from_raw(raw)
}
