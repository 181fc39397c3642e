//! HTTP request handlers for the Holiday Entitlement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    BalanceCheck, CalendarContext, LeaveSelection, RangeValidation, build_submission_payload,
    check_balance, month_calendar, parse_flexible_date,
};
use crate::config::{ConfigLoader, LeaveTypeConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayYear, SelectionResult, SubmissionDetails, normalize_history};

use super::request::{CalendarRequest, HistoryRequest, SelectionRequest, SubmissionRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalendarResponse, HistoryResponse, SelectionResponse,
    ValidationStatus,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/selection", post(selection_handler))
        .route("/submission", post(submission_handler))
        .route("/history", post(history_handler))
        .route("/calendar", post(calendar_handler))
        .with_state(state)
}

/// Handler for POST /selection.
///
/// Validates the picked range and returns its chargeable outcome alongside
/// the balance position. A rejected range is reported in the body, not as
/// an error status.
async fn selection_handler(
    State(state): State<AppState>,
    payload: Result<Json<SelectionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing selection request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match evaluate_selection(&request, state.config()) {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                holiday_year = outcome.holiday_year.year,
                working_days = outcome.selection.working_day_count,
                effective_days = %outcome.selection.effective_days,
                exceeds_balance = outcome.balance.exceeds,
                duration_us = start_time.elapsed().as_micros(),
                "Selection evaluated"
            );
            json_response(StatusCode::OK, &outcome.into_response_body())
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Selection failed");
            error_response(err)
        }
    }
}

/// Handler for POST /submission.
///
/// Re-evaluates the selection and returns the payload to forward to the HR
/// API. Rejected or empty selections produce no payload.
async fn submission_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing submission request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    let result = evaluate_selection(&request.selection, config).and_then(|outcome| {
        if let RangeValidation::Rejected(reason) = outcome.validation {
            return Err(EngineError::PolicyViolation {
                reason: reason.to_string(),
            });
        }
        if outcome.balance.exceeds {
            // Advisory only: the HR API decides.
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                remaining = %outcome.balance.remaining_before,
                requested = %outcome.balance.requested,
                "Submission exceeds remaining balance"
            );
        }

        let details = SubmissionDetails {
            leave_type: outcome.leave_type.name.clone(),
            notes: request.note.clone(),
            holiday_year: outcome.holiday_year.year,
            employee_id: request.employee_id.clone(),
            portal_id: config.policy().portal_id.clone(),
        };
        build_submission_payload(&outcome.selection, &details)
    });

    match result {
        Ok(submission) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %submission.employee_id,
                start_date = %submission.start_date,
                end_date = %submission.end_date,
                duration_days = %submission.duration_days,
                "Submission payload built"
            );
            json_response(StatusCode::OK, &submission)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Submission refused");
            error_response(err)
        }
    }
}

/// Handler for POST /history.
///
/// Normalizes raw history records. Records without usable dates are
/// dropped and counted.
async fn history_handler(payload: Result<Json<HistoryRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing history request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let entries = normalize_history(&request.records);
    let excluded = request.records.len() - entries.len();
    if excluded > 0 {
        warn!(
            correlation_id = %correlation_id,
            excluded,
            "History records without usable dates were excluded"
        );
    }
    info!(
        correlation_id = %correlation_id,
        entries = entries.len(),
        "History normalized"
    );

    json_response(StatusCode::OK, &HistoryResponse { entries, excluded })
}

/// Handler for POST /calendar.
///
/// Classifies every day of the requested month for highlighting.
async fn calendar_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalendarRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calendar request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if !(1..=12).contains(&request.month) {
        warn!(correlation_id = %correlation_id, month = request.month, "Invalid month");
        let error = ApiError::validation_error(format!(
            "month must be between 1 and 12, got {}",
            request.month
        ));
        return json_response(StatusCode::BAD_REQUEST, &error);
    }

    let config = state.config();
    let holiday_year = match resolve_holiday_year(config, request.holiday_year, request.today) {
        Ok(year) => year,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Holiday year unresolved");
            return error_response(err);
        }
    };

    let context = CalendarContext {
        holiday_year,
        pattern: request
            .entitlement
            .working_pattern_or(config.default_working_pattern()),
        booked: request.entitlement.booked_dates(),
        public_holidays: request.entitlement.public_holidays(),
    };
    let days = month_calendar(request.year, request.month, &context);
    info!(
        correlation_id = %correlation_id,
        year = request.year,
        month = request.month,
        days = days.len(),
        "Calendar classified"
    );

    json_response(StatusCode::OK, &CalendarResponse { holiday_year, days })
}

/// Everything learned from evaluating one selection request.
struct SelectionOutcome {
    validation: RangeValidation,
    holiday_year: HolidayYear,
    selection: SelectionResult,
    balance: BalanceCheck,
    leave_type: LeaveTypeConfig,
}

impl SelectionOutcome {
    fn into_response_body(self) -> SelectionResponse {
        SelectionResponse {
            status: ValidationStatus::from(&self.validation),
            reason: self.validation.rejection().map(|r| r.to_string()),
            holiday_year: self.holiday_year,
            selection: self.selection,
            balance: self.balance,
        }
    }
}

/// Runs a selection request through validation, effective-day reduction and
/// balance reconciliation.
fn evaluate_selection(
    request: &SelectionRequest,
    config: &ConfigLoader,
) -> EngineResult<SelectionOutcome> {
    let leave_type = match request.leave_type.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => config.get_leave_type(name)?,
        _ => config.default_leave_type()?,
    };

    let holiday_year = resolve_holiday_year(config, request.holiday_year, request.today)?;
    let start = parse_date_field("start_date", request.start_date.as_deref())?;
    let end = parse_date_field("end_date", request.end_date.as_deref())?;

    let entitlement = &request.entitlement;
    let pattern = entitlement.working_pattern_or(config.default_working_pattern());
    let public_holidays = entitlement.public_holidays();

    let mut picker = LeaveSelection::new();
    let validation = picker.pick(start, end, &holiday_year, &pattern);
    picker.set_start_part(request.start_part);
    picker.set_end_part(request.end_part);

    // A rejected range reports an empty selection.
    let selection = picker.compute(&pattern, &public_holidays);
    let balance = check_balance(
        selection.effective_days,
        entitlement.remaining_holiday,
        leave_type.counts_against_balance,
    );

    Ok(SelectionOutcome {
        validation,
        holiday_year,
        selection,
        balance,
        leave_type: leave_type.clone(),
    })
}

/// Picks the holiday year from an explicit label, else from `today`, else
/// from the server date.
fn resolve_holiday_year(
    config: &ConfigLoader,
    label: Option<i32>,
    today: Option<NaiveDate>,
) -> EngineResult<HolidayYear> {
    match label {
        Some(year) => config.holiday_year(year),
        None => config.current_holiday_year(today.unwrap_or_else(|| Utc::now().date_naive())),
    }
}

/// Blank fields mean "not picked"; anything else must parse.
fn parse_date_field(field: &str, raw: Option<&str>) -> EngineResult<Option<NaiveDate>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => parse_flexible_date(value)
            .map(Some)
            .ok_or_else(|| EngineError::InvalidDate {
                field: field.to_string(),
                value: value.to_string(),
            }),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError) -> Response {
    ApiErrorResponse::from(err).into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, &error)
}
