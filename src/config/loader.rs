//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading holiday
//! policy configurations from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayYear, WorkingPattern};

use super::types::{HolidayPolicy, LeaveTypeConfig, LeaveTypesConfig, PolicyConfig};

/// Loads and provides access to holiday policy configuration.
///
/// # Directory Structure
///
/// ```text
/// config/holiday_policy/
/// ├── policy.yaml       # Holiday year boundary, default pattern, portal id
/// └── leave_types.yaml  # Leave types that can be requested
/// ```
///
/// # Example
///
/// ```no_run
/// use holiday_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/holiday_policy")?;
/// let year = loader.holiday_year(2025)?;
/// println!("Holiday year 2025 runs {} to {}", year.start, year.end);
/// # Ok::<(), holiday_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: HolidayPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - Either file is missing ([`EngineError::ConfigNotFound`])
    /// - Either file contains invalid YAML ([`EngineError::ConfigParseError`])
    /// - The holiday year boundary is not a real day, no leave types are
    ///   configured, or the default leave type is unknown
    ///   ([`EngineError::InvalidConfig`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<PolicyConfig>(&path.join("policy.yaml"))?;
        let leave_types = Self::load_yaml::<LeaveTypesConfig>(&path.join("leave_types.yaml"))?;

        let loader = Self::from_policy(HolidayPolicy::new(policy, leave_types.leave_types))?;
        info!(
            path = %path.display(),
            organisation = %loader.policy().organisation,
            leave_types = loader.config.leave_types().len(),
            "Loaded holiday policy"
        );
        Ok(loader)
    }

    /// Wraps an already-built policy after validating it.
    pub fn from_policy(config: HolidayPolicy) -> EngineResult<Self> {
        config.policy().holiday_year.validate()?;

        if config.leave_types().is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "at least one leave type must be configured".to_string(),
            });
        }

        let loader = Self { config };
        let default_type = &loader.policy().default_leave_type;
        if loader.get_leave_type(default_type).is_err() {
            return Err(EngineError::InvalidConfig {
                message: format!("default leave type '{}' is not configured", default_type),
            });
        }
        Ok(loader)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &HolidayPolicy {
        &self.config
    }

    /// Returns the booking policy.
    pub fn policy(&self) -> &PolicyConfig {
        self.config.policy()
    }

    /// Working pattern used when an employee record lists none.
    pub fn default_working_pattern(&self) -> &WorkingPattern {
        &self.policy().default_working_days
    }

    /// Gets a leave type by code or by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::LeaveTypeNotFound`] if neither matches.
    pub fn get_leave_type(&self, code_or_name: &str) -> EngineResult<&LeaveTypeConfig> {
        let wanted = code_or_name.trim();
        let leave_types = self.config.leave_types();

        leave_types
            .get(wanted)
            .or_else(|| {
                leave_types
                    .values()
                    .find(|lt| lt.name.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| EngineError::LeaveTypeNotFound {
                name: wanted.to_string(),
            })
    }

    /// Returns the configured default leave type.
    pub fn default_leave_type(&self) -> EngineResult<&LeaveTypeConfig> {
        self.get_leave_type(&self.policy().default_leave_type)
    }

    /// Builds the holiday year labelled `year` under this policy.
    pub fn holiday_year(&self, year: i32) -> EngineResult<HolidayYear> {
        HolidayYear::for_year(year, &self.policy().holiday_year)
    }

    /// Finds the holiday year containing `today`.
    pub fn current_holiday_year(&self, today: NaiveDate) -> EngineResult<HolidayYear> {
        HolidayYear::containing(today, &self.policy().holiday_year)
    }
}
