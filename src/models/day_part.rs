//! Half-day model for the boundaries of a leave request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which part of a day a leave request covers.
///
/// Only the first and last chargeable day of a range carry a part; every day
/// between them is always a full day. On the wire the parts travel as the
/// two-letter codes `FD`, `AM` and `PM`.
///
/// # Example
///
/// ```
/// use holiday_engine::models::DayPart;
/// use rust_decimal::Decimal;
///
/// assert_eq!(DayPart::FullDay.weight(), Decimal::ONE);
/// assert_eq!(DayPart::Morning.weight(), Decimal::new(5, 1));
/// assert_eq!(DayPart::Afternoon.code(), "PM");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPart {
    /// The whole day.
    #[default]
    #[serde(rename = "FD", alias = "full_day")]
    FullDay,
    /// Morning only.
    #[serde(rename = "AM", alias = "morning")]
    Morning,
    /// Afternoon only.
    #[serde(rename = "PM", alias = "afternoon")]
    Afternoon,
}

impl DayPart {
    /// Returns the number of days this part is charged as.
    pub fn weight(self) -> Decimal {
        match self {
            DayPart::FullDay => Decimal::ONE,
            DayPart::Morning | DayPart::Afternoon => Decimal::new(5, 1),
        }
    }

    /// Returns the two-letter code used by the HR API.
    pub fn code(self) -> &'static str {
        match self {
            DayPart::FullDay => "FD",
            DayPart::Morning => "AM",
            DayPart::Afternoon => "PM",
        }
    }
}

impl std::fmt::Display for DayPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayPart::FullDay => write!(f, "Full day"),
            DayPart::Morning => write!(f, "Morning"),
            DayPart::Afternoon => write!(f, "Afternoon"),
        }
    }
}
