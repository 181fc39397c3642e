//! Holiday Entitlement Engine
//!
//! This crate computes holiday entitlement for an HR self-service portal:
//! which days of a picked range are chargeable, how many effective days
//! they cost once half-days are applied, whether the range fits the
//! employee's holiday year and working pattern, and what payload to send
//! to the HR API to raise the request.
//!
//! The [`calculation`] module is pure and free of I/O. The [`api`] module
//! wraps it in an axum router, and [`config`] loads the organisation's
//! holiday policy from YAML.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
