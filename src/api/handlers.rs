//! HTTP request handlers for the Leave Accrual Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    has_completed_anniversary, has_completed_at_least, last_working_day, years_of_service,
};

use super::request::{AccrualRequest, AnniversaryRequest};
use super::response::{
    AccrualResponse, AnniversaryResponse, ApiError, ApiErrorResponse, WorkingDayResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/accrual", post(accrual_handler))
        .route("/anniversary", post(anniversary_handler))
        .route("/working-days/:year/:month", get(working_day_handler))
        .with_state(state)
}

/// Handler for POST /accrual.
///
/// Replays the employee's service and returns the balance with its per-year
/// breakdown.
async fn accrual_handler(
    State(state): State<AppState>,
    payload: Result<Json<AccrualRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing accrual request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let as_of = request.as_of.unwrap_or_else(today);
    let start_time = Instant::now();

    match state.engine().report(request.join_date, as_of) {
        Ok(mut report) => {
            report.employee_id = request.employee_id;
            info!(
                correlation_id = %correlation_id,
                join_date = %report.join_date,
                as_of = %as_of,
                years = report.years.len(),
                casual = %report.balance.casual,
                sick = %report.balance.sick,
                duration_us = start_time.elapsed().as_micros(),
                "Accrual calculated"
            );
            json_response(
                StatusCode::OK,
                AccrualResponse {
                    calculation_id: correlation_id,
                    report,
                },
            )
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Accrual calculation failed");
            error_response(err.into())
        }
    }
}

/// Handler for GET /working-days/{year}/{month}.
async fn working_day_handler(Path((year, month)): Path<(i32, u32)>) -> Response {
    match last_working_day(year, month) {
        Ok(last_working_day) => json_response(
            StatusCode::OK,
            WorkingDayResponse {
                year,
                month,
                last_working_day,
            },
        ),
        Err(err) => {
            warn!(year, month, error = %err, "Rejected working day lookup");
            error_response(err.into())
        }
    }
}

/// Handler for POST /anniversary.
///
/// Reports both the exact-day and the at-least service predicates.
async fn anniversary_handler(
    payload: Result<Json<AnniversaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let as_of = request.as_of.unwrap_or_else(today);
    let response = AnniversaryResponse {
        years: request.years,
        as_of,
        years_of_service: years_of_service(request.join_date, as_of),
        is_anniversary_day: has_completed_anniversary(request.join_date, as_of, request.years),
        completed_at_least: has_completed_at_least(request.join_date, as_of, request.years),
    };

    info!(
        correlation_id = %correlation_id,
        years = request.years,
        is_anniversary_day = response.is_anniversary_day,
        "Anniversary checked"
    );
    json_response(StatusCode::OK, response)
}

/// The as-of date used when a request omits one, read once per request.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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

    error_response(ApiErrorResponse::bad_request(error))
}
