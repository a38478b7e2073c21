//! Integration tests for the Leave Accrual Engine.
//!
//! This test suite covers:
//! - Reference accrual scenarios through the engine
//! - Month-close and year-end boundaries
//! - Pre-epoch joins and anniversary bonuses
//! - The HTTP endpoints, including error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use leave_engine::api::{AppState, create_router};
use leave_engine::calculation::{AccrualEngine, compute_accrual};
use leave_engine::config::ConfigLoader;
use leave_engine::models::{AccrualResult, Employee};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/leave_policy").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn balance(casual: &str, sick: &str) -> AccrualResult {
    AccrualResult::new(decimal(casual), decimal(sick))
}

fn accrue(join: &str, as_of: &str) -> AccrualResult {
    compute_accrual(make_date(join), make_date(as_of)).unwrap()
}

/// Reads a decimal serialized as a JSON string.
fn json_decimal(value: &Value) -> Decimal {
    decimal(value.as_str().expect("decimal serialized as string"))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_json(uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(create_router_for_test(), request).await
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(create_router_for_test(), request).await
}

fn assert_balance(result: &Value, casual: &str, sick: &str) {
    assert_eq!(
        json_decimal(&result["balance"]["casual"]),
        decimal(casual),
        "casual balance in {}",
        result
    );
    assert_eq!(
        json_decimal(&result["balance"]["sick"]),
        decimal(sick),
        "sick balance in {}",
        result
    );
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn test_first_month_after_close() {
    assert_eq!(accrue("2023-01-01", "2023-01-31"), balance("2", "1"));
}

#[test]
fn test_first_month_before_close() {
    assert_eq!(accrue("2023-01-01", "2023-01-30"), balance("1", "0.5"));
}

#[test]
fn test_three_years_with_bonus() {
    assert_eq!(accrue("2023-01-01", "2026-02-01"), balance("12", "0.5"));
}

#[test]
fn test_five_years_with_bonus() {
    assert_eq!(accrue("2021-01-01", "2026-07-01"), balance("19", "3"));
}

#[test]
fn test_pre_epoch_join_with_third_anniversary() {
    assert_eq!(accrue("2018-06-01", "2021-07-01"), balance("17", "3"));
}

#[test]
fn test_epoch_join_without_bonus() {
    assert_eq!(accrue("2020-01-01", "2021-07-01"), balance("14", "3"));
}

#[test]
fn test_pre_epoch_join_before_anniversary() {
    // Same balance as an epoch joiner until the anniversary arrives
    assert_eq!(accrue("2018-06-01", "2021-05-31"), balance("13", "2.5"));
    assert_eq!(accrue("2020-01-01", "2021-05-31"), balance("13", "2.5"));
}

#[test]
fn test_pre_epoch_join_evaluated_before_epoch() {
    assert_eq!(accrue("2018-06-01", "2019-12-31"), AccrualResult::ZERO);
}

#[test]
fn test_epoch_join_on_epoch() {
    assert_eq!(accrue("2020-01-01", "2020-01-01"), balance("1", "0.5"));
}

// =============================================================================
// Year-End Boundaries
// =============================================================================

#[test]
fn test_december_close_counts_january_credit() {
    assert_eq!(accrue("2023-01-01", "2023-12-29"), balance("13", "6.5"));
    assert_eq!(accrue("2023-01-01", "2023-12-31"), balance("13", "6.5"));
}

#[test]
fn test_new_year_applies_carry_forward() {
    assert_eq!(accrue("2023-01-01", "2024-01-01"), balance("8", "0"));
}

#[test]
fn test_second_year_builds_on_capped_carry() {
    assert_eq!(accrue("2023-01-01", "2024-11-29"), balance("19", "5.5"));
}

#[test]
fn test_december_joiner_crosses_year_end() {
    assert_eq!(accrue("2023-12-04", "2024-01-15"), balance("2", "0"));
}

// =============================================================================
// Join-Year Scenarios
// =============================================================================

#[test]
fn test_mid_year_join_on_or_before_cutoff() {
    assert_eq!(accrue("2023-03-10", "2023-06-15"), balance("4", "2"));
    assert_eq!(accrue("2023-03-10", "2023-03-30"), balance("1", "0.5"));
}

#[test]
fn test_join_after_cutoff() {
    assert_eq!(accrue("2023-03-20", "2023-03-20"), balance("0", "0.5"));
    assert_eq!(accrue("2023-01-20", "2023-01-31"), balance("1", "1"));
}

#[test]
fn test_balance_constant_between_closes() {
    let expected = balance("10", "5");
    for as_of in ["2023-09-29", "2023-09-30", "2023-10-01"] {
        assert_eq!(accrue("2023-01-01", as_of), expected, "as of {}", as_of);
    }
}

#[test]
fn test_report_for_employee_carries_identifier() {
    let engine = AccrualEngine::default();
    let employee = Employee::new("emp_042", make_date("2023-01-01"));

    let report = engine
        .report_for(&employee, make_date("2026-02-01"))
        .unwrap();

    assert_eq!(report.employee_id.as_deref(), Some("emp_042"));
    assert_eq!(report.balance, balance("12", "0.5"));
    assert_eq!(report.years.len(), 4);
}

// =============================================================================
// HTTP: /accrual
// =============================================================================

#[tokio::test]
async fn test_accrual_endpoint_reference_scenario() {
    let body = json!({
        "employee_id": "emp_001",
        "join_date": "2023-01-01",
        "as_of": "2026-02-01"
    });

    let (status, result) = post_json("/accrual", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_balance(&result, "12", "0.5");
    assert_eq!(result["employee_id"], "emp_001");
    assert_eq!(result["effective_join_date"], "2023-01-01");
    assert!(result["calculation_id"].as_str().is_some());
}

#[tokio::test]
async fn test_accrual_endpoint_year_breakdown() {
    let body = json!({ "join_date": "2023-01-01", "as_of": "2024-01-01" });

    let (status, result) = post_json("/accrual", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let years = result["years"].as_array().unwrap();
    assert_eq!(years.len(), 2);
    assert_eq!(years[0]["year"], 2023);
    assert_eq!(years[0]["year_end_applied"], true);
    assert_eq!(json_decimal(&years[0]["closing"]["casual"]), decimal("8"));
    assert_eq!(json_decimal(&years[0]["closing"]["sick"]), decimal("0"));
    assert_eq!(years[1]["year"], 2024);
    assert_eq!(years[1]["year_end_applied"], false);
    assert!(result.get("employee_id").is_none());
}

#[tokio::test]
async fn test_accrual_endpoint_pre_epoch_join() {
    let body = json!({ "join_date": "2018-06-01", "as_of": "2021-07-01" });

    let (status, result) = post_json("/accrual", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_balance(&result, "17", "3");
    assert_eq!(result["join_date"], "2018-06-01");
    assert_eq!(result["effective_join_date"], "2020-01-01");
}

#[tokio::test]
async fn test_accrual_endpoint_as_of_before_join() {
    let body = json!({ "join_date": "2024-06-01", "as_of": "2023-06-01" });

    let (status, result) = post_json("/accrual", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_balance(&result, "0", "0");
    assert!(result["years"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_accrual_endpoint_defaults_as_of_to_today() {
    let body = json!({ "join_date": "2023-01-01" });

    let (status, result) = post_json("/accrual", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["as_of"].as_str().is_some());
}

#[tokio::test]
async fn test_accrual_endpoint_missing_join_date() {
    let body = json!({ "as_of": "2024-01-01" });

    let (status, result) = post_json("/accrual", body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert!(result["message"].as_str().unwrap().contains("join_date"));
}

#[tokio::test]
async fn test_accrual_endpoint_malformed_json() {
    let (status, result) = post_json("/accrual", "{ not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_accrual_endpoint_impossible_date() {
    let body = json!({ "join_date": "2023-02-30", "as_of": "2024-01-01" });

    let (status, result) = post_json("/accrual", body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

// =============================================================================
// HTTP: /working-days
// =============================================================================

#[tokio::test]
async fn test_working_day_endpoint_weekday_month_end() {
    let (status, result) = get("/working-days/2023/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["last_working_day"], "2023-01-31");
}

#[tokio::test]
async fn test_working_day_endpoint_weekend_month_end() {
    // 30 September 2023 is a Saturday
    let (status, result) = get("/working-days/2023/9").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["year"], 2023);
    assert_eq!(result["month"], 9);
    assert_eq!(result["last_working_day"], "2023-09-29");
}

#[tokio::test]
async fn test_working_day_endpoint_leap_february() {
    let (status, result) = get("/working-days/2024/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["last_working_day"], "2024-02-29");
}

#[tokio::test]
async fn test_working_day_endpoint_invalid_month() {
    let (status, result) = get("/working-days/2026/13").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_DATE");

    let (status, _) = get("/working-days/2026/0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// HTTP: /anniversary
// =============================================================================

#[tokio::test]
async fn test_anniversary_endpoint_on_the_day() {
    let body = json!({ "join_date": "2023-01-01", "as_of": "2026-01-01", "years": 3 });

    let (status, result) = post_json("/anniversary", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["years_of_service"], 3);
    assert_eq!(result["is_anniversary_day"], true);
    assert_eq!(result["completed_at_least"], true);
}

#[tokio::test]
async fn test_anniversary_endpoint_day_after() {
    let body = json!({ "join_date": "2023-01-01", "as_of": "2026-01-02", "years": 3 });

    let (status, result) = post_json("/anniversary", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["is_anniversary_day"], false);
    assert_eq!(result["completed_at_least"], true);
}

#[tokio::test]
async fn test_anniversary_endpoint_missing_years() {
    let body = json!({ "join_date": "2023-01-01" });

    let (status, result) = post_json("/anniversary", body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}
