//! Response types for the Holiday Entitlement Engine API.
//!
//! This module defines the success bodies and the error response structures
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::{BalanceCheck, CalendarDay, RangeValidation};
use crate::error::EngineError;
use crate::models::{HistoryEntry, HolidayYear, SelectionResult};

/// Outcome of validating the picked range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    /// One or both endpoints were not supplied.
    NoSelection,
    /// The range passed validation.
    Validated,
    /// The range was refused; see `reason`.
    Rejected,
}

impl From<&RangeValidation> for ValidationStatus {
    fn from(validation: &RangeValidation) -> Self {
        match validation {
            RangeValidation::NoSelection => ValidationStatus::NoSelection,
            RangeValidation::Valid { .. } => ValidationStatus::Validated,
            RangeValidation::Rejected(_) => ValidationStatus::Rejected,
        }
    }
}

/// Response body for the `/selection` endpoint.
///
/// A rejected range is a notice, not an error: the response is still 200
/// with an empty selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResponse {
    /// Validation outcome.
    pub status: ValidationStatus,
    /// Human-readable rejection reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The holiday year the range was checked against.
    pub holiday_year: HolidayYear,
    /// The chargeable outcome.
    pub selection: SelectionResult,
    /// Balance position if the request were made.
    pub balance: BalanceCheck,
}

/// Response body for the `/history` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Normalized entries, in input order.
    pub entries: Vec<HistoryEntry>,
    /// Number of records dropped for unusable dates.
    pub excluded: usize,
}

/// Response body for the `/calendar` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// The holiday year used for classification.
    pub holiday_year: HolidayYear,
    /// One entry per day of the month.
    pub days: Vec<CalendarDay>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            // Raised at request time only for holiday years chrono cannot represent.
            EngineError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_HOLIDAY_YEAR",
                    "Holiday year cannot be resolved",
                    message,
                ),
            },
            EngineError::LeaveTypeNotFound { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "LEAVE_TYPE_NOT_FOUND",
                    format!("Leave type not found: {}", name),
                    format!("The leave type '{}' is not configured for this portal", name),
                ),
            },
            EngineError::EmptySelection => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "EMPTY_SELECTION",
                    "Selection contains no chargeable days",
                    "Every day in the range is a non-working day or a public holiday",
                ),
            },
            EngineError::PolicyViolation { reason } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("POLICY_VIOLATION", reason),
            },
            EngineError::InvalidDate { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid date in field '{}'", field),
                    format!("'{}' is not a DD/MM/YYYY or ISO 8601 date", value),
                ),
            },
        }
    }
}
