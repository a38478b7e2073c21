//! Employee model.
//!
//! Only the fields the accrual engine needs are carried here; everything else
//! about an employee lives in the surrounding HR service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An employee whose leave balance is being computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// The date the employee joined.
    pub join_date: NaiveDate,
}

impl Employee {
    /// Creates an employee record.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee::new("emp_001", NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    /// assert!(employee.validate().is_ok());
    /// ```
    pub fn new(id: impl Into<String>, join_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: None,
            join_date,
        }
    }

    /// Checks the record is usable for accrual.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
