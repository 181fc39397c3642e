//! Configuration types for holiday booking policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::HashMap;

use crate::models::{HolidayYearBoundary, WorkingPattern};

/// Organisation-wide booking policy from `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// The organisation the policy belongs to.
    pub organisation: String,
    /// Portal identifier sent with every submission.
    pub portal_id: String,
    /// Where each holiday year starts.
    #[serde(default)]
    pub holiday_year: HolidayYearBoundary,
    /// Working pattern used when an employee record lists none.
    #[serde(default)]
    pub default_working_days: WorkingPattern,
    /// Leave type assumed when a request names none.
    pub default_leave_type: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            organisation: "Default".to_string(),
            portal_id: "default".to_string(),
            holiday_year: HolidayYearBoundary::default(),
            default_working_days: WorkingPattern::default(),
            default_leave_type: "annual_leave".to_string(),
        }
    }
}

/// A kind of leave an employee can request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeaveTypeConfig {
    /// Name sent to the HR API, e.g. "Annual Leave".
    pub name: String,
    /// A description of the leave type.
    #[serde(default)]
    pub description: String,
    /// Whether requests of this type reduce the holiday balance.
    #[serde(default = "default_counts_against_balance")]
    pub counts_against_balance: bool,
}

fn default_counts_against_balance() -> bool {
    true
}

/// Leave types configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveTypesConfig {
    /// Map of leave type code to leave type details.
    pub leave_types: HashMap<String, LeaveTypeConfig>,
}

/// The complete holiday policy loaded from YAML files.
#[derive(Debug, Clone)]
pub struct HolidayPolicy {
    policy: PolicyConfig,
    leave_types: HashMap<String, LeaveTypeConfig>,
}

impl HolidayPolicy {
    /// Creates a new HolidayPolicy from its component parts.
    pub fn new(policy: PolicyConfig, leave_types: HashMap<String, LeaveTypeConfig>) -> Self {
        Self {
            policy,
            leave_types,
        }
    }

    /// Returns the booking policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Returns all leave types keyed by code.
    pub fn leave_types(&self) -> &HashMap<String, LeaveTypeConfig> {
        &self.leave_types
    }
}

impl Default for HolidayPolicy {
    /// Built-in policy: 1 December boundary, Monday to Friday, annual and
    /// unpaid leave.
    fn default() -> Self {
        let leave_types = HashMap::from([
            (
                "annual_leave".to_string(),
                LeaveTypeConfig {
                    name: "Annual Leave".to_string(),
                    description: "Paid holiday taken from the annual entitlement".to_string(),
                    counts_against_balance: true,
                },
            ),
            (
                "unpaid_leave".to_string(),
                LeaveTypeConfig {
                    name: "Unpaid Leave".to_string(),
                    description: "Leave without pay".to_string(),
                    counts_against_balance: false,
                },
            ),
        ]);
        Self::new(PolicyConfig::default(), leave_types)
    }
}
