//! Response types for the Leave Accrual Engine API.
//!
//! This module defines the success bodies returned by the endpoints and the
//! error response structures used to report failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::AccrualReport;

/// Response body for the `/accrual` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccrualResponse {
    /// Identifier for correlating this calculation in logs.
    pub calculation_id: Uuid,
    /// The computed report.
    #[serde(flatten)]
    pub report: AccrualReport,
}

/// Response body for the `/working-days/{year}/{month}` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDayResponse {
    /// The requested year.
    pub year: i32,
    /// The requested month.
    pub month: u32,
    /// The last Monday-to-Friday date of the month.
    pub last_working_day: NaiveDate,
}

/// Response body for the `/anniversary` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnniversaryResponse {
    /// The milestone that was checked.
    pub years: u32,
    /// The date evaluated.
    pub as_of: NaiveDate,
    /// Full years of service completed by `as_of`.
    pub years_of_service: u32,
    /// True only on the exact anniversary date.
    pub is_anniversary_day: bool,
    /// True once the milestone has been reached.
    pub completed_at_least: bool,
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

impl ApiErrorResponse {
    /// A 400 response wrapping `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidPolicy { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("POLICY_ERROR", "Leave policy is invalid", message),
            },
            EngineError::InvalidDate { .. } => ApiErrorResponse::bad_request(ApiError::with_details(
                "INVALID_DATE",
                message,
                "Months run from 1 to 12",
            )),
            EngineError::InvalidEmployee { .. } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    message,
                    "The employee data contains invalid information",
                ))
            }
        }
    }
}
