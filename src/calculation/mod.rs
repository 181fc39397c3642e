//! Calculation logic for the Holiday Entitlement Engine.
//!
//! This module contains the pure working-calendar calculator: date
//! normalization, working-day and holiday predicates, range validation,
//! reduction of a range to effective days, balance reconciliation,
//! submission payload construction, and day classification for calendar
//! views. Nothing here performs I/O or holds shared state.

mod balance;
mod date_parsing;
mod day_status;
mod effective_days;
mod selection;
mod submission;
mod validation;
mod working_day;

pub use balance::{BalanceCheck, check_balance, would_exceed_balance};
pub use date_parsing::{format_dmy, parse_date_list, parse_flexible_date};
pub use day_status::{CalendarContext, CalendarDay, DayStatus, classify_day, month_calendar};
pub use effective_days::{chargeable_days, compute_selection};
pub use selection::{LeaveSelection, SelectionPhase};
pub use submission::build_submission_payload;
pub use validation::{RangeValidation, RejectionReason, validate_range};
pub use working_day::{is_booked, is_public_holiday, is_working_day, weekday_id};
