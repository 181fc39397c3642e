//! Error types for the Holiday Entitlement Engine.
//!
//! Pure calculator functions never fail: unparseable dates are `None` and
//! policy violations are [`RangeValidation::Rejected`](crate::calculation::RangeValidation).
//! This module covers the fallible edges around them: configuration loading,
//! leave type lookup and submission payload construction.

use thiserror::Error;

/// The main error type for the Holiday Entitlement Engine.
///
/// # Example
///
/// ```
/// use holiday_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the engine cannot use.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the invalid value.
        message: String,
    },

    /// Leave type was not found in the configuration.
    #[error("Leave type not found: {name}")]
    LeaveTypeNotFound {
        /// The leave type name that was not found.
        name: String,
    },

    /// A submission was requested for a selection with no chargeable days.
    #[error("Selection contains no chargeable days")]
    EmptySelection,

    /// A candidate range broke a booking rule.
    #[error("Policy violation: {reason}")]
    PolicyViolation {
        /// The human-readable rejection reason.
        reason: String,
    },

    /// A date field could not be interpreted.
    #[error("Invalid date in field '{field}': {value}")]
    InvalidDate {
        /// The field that held the date.
        field: String,
        /// The raw value received.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
