//! HTTP API module for the Holiday Entitlement Engine.
//!
//! This module exposes the calculator over JSON endpoints so a booking
//! front end can validate selections, preview balances, build submission
//! payloads, normalize history and shade calendar months.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalendarRequest, HistoryRequest, SelectionRequest, SubmissionRequest};
pub use response::{
    ApiError, CalendarResponse, HistoryResponse, SelectionResponse, ValidationStatus,
};
pub use state::AppState;
