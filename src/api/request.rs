//! Request types for the Leave Accrual Engine API.
//!
//! This module defines the JSON request structures for the `/accrual` and
//! `/anniversary` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for the `/accrual` endpoint.
///
/// `as_of` defaults to the server's current local date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccrualRequest {
    /// Optional employee identifier echoed back in the report.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The employee's join date.
    pub join_date: NaiveDate,
    /// The date to evaluate the balance at.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for the `/anniversary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnniversaryRequest {
    /// The employee's join date.
    pub join_date: NaiveDate,
    /// The date to evaluate at.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// The service milestone in years.
    pub years: u32,
}
