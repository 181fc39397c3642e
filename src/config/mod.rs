//! Configuration loading and management for the Holiday Entitlement Engine.
//!
//! This module provides functionality to load holiday booking policy from
//! YAML files: the holiday year boundary, the default working pattern, the
//! portal identifier, and the leave types that can be requested.
//!
//! # Example
//!
//! ```no_run
//! use holiday_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/holiday_policy").unwrap();
//! println!("Loaded policy for: {}", config.policy().organisation);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidayPolicy, LeaveTypeConfig, LeaveTypesConfig, PolicyConfig};
