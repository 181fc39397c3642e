//! Integration tests for the Holiday Entitlement Engine.
//!
//! This test suite drives the HTTP router end to end:
//! - Effective-day counts with half-days
//! - Public holiday and working pattern exclusion
//! - Holiday year and non-working-day rejection
//! - Balance reconciliation and non-deducting leave types
//! - Submission payloads
//! - History normalization
//! - Calendar classification
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use holiday_engine::api::{AppState, create_router};
use holiday_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/holiday_policy").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal serialized either as a string or as a JSON number.
fn decimal_at(value: &Value) -> Decimal {
    match value {
        Value::String(s) => decimal(s),
        Value::Number(n) => decimal(&n.to_string()),
        other => panic!("Expected a decimal, got {}", other),
    }
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_selection(body: Value) -> (StatusCode, Value) {
    post_json(create_router_for_test(), "/selection", body).await
}

async fn post_submission(body: Value) -> (StatusCode, Value) {
    post_json(create_router_for_test(), "/submission", body).await
}

fn entitlement(remaining: &str, public_holidays: Vec<&str>) -> Value {
    json!({
        "workhours": [
            {"day_id": 1}, {"day_id": 2}, {"day_id": 3}, {"day_id": 4}, {"day_id": 5}
        ],
        "holiday_dates": [],
        "public_and_xmas_holiday_dates": public_holidays,
        "holiday_entitlement": "28",
        "total_booked_holiday": "10",
        "total_mandatory_xmas_holiday": "3",
        "holiday_balance_carried_forward": "0",
        "remaining_holiday": remaining,
        "holiday_cycle_start": "01/12/2024",
        "holiday_cycle_end": "30/11/2025"
    })
}

fn selection_request(start: &str, end: &str, start_part: &str, end_part: &str) -> Value {
    json!({
        "holiday_year": 2025,
        "start_date": start,
        "end_date": end,
        "start_part": start_part,
        "end_part": end_part,
        "entitlement": entitlement("15", vec![])
    })
}

// =============================================================================
// Effective Days
// =============================================================================

#[tokio::test]
async fn test_full_week_charges_five_days() {
    let (status, body) =
        post_selection(selection_request("10/03/2025", "14/03/2025", "FD", "FD")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "validated");
    assert_eq!(body["selection"]["has_selection"], true);
    assert_eq!(body["selection"]["normalized_start"], "2025-03-10");
    assert_eq!(body["selection"]["normalized_end"], "2025-03-14");
    assert_eq!(body["selection"]["working_day_count"], 5);
    assert_eq!(decimal_at(&body["selection"]["effective_days"]), decimal("5"));
}

#[tokio::test]
async fn test_afternoon_start_charges_half_day_less() {
    let (_, body) =
        post_selection(selection_request("10/03/2025", "14/03/2025", "PM", "FD")).await;

    assert_eq!(decimal_at(&body["selection"]["effective_days"]), decimal("4.5"));
    assert_eq!(body["selection"]["start_part"], "PM");
    assert_eq!(body["selection"]["end_part"], "FD");
}

#[tokio::test]
async fn test_half_days_at_both_ends() {
    let (_, body) =
        post_selection(selection_request("10/03/2025", "14/03/2025", "PM", "AM")).await;

    assert_eq!(body["selection"]["working_day_count"], 5);
    assert_eq!(decimal_at(&body["selection"]["effective_days"]), decimal("4"));
}

#[tokio::test]
async fn test_single_morning_is_half_a_day() {
    let (_, body) =
        post_selection(selection_request("12/03/2025", "12/03/2025", "AM", "PM")).await;

    assert_eq!(body["selection"]["working_day_count"], 1);
    assert_eq!(decimal_at(&body["selection"]["effective_days"]), decimal("0.5"));
    // A single day has one part.
    assert_eq!(body["selection"]["end_part"], "AM");
}

#[tokio::test]
async fn test_two_weeks_with_half_day_boundaries() {
    let (_, body) = post_selection(selection_request(
        "10/03/2025",
        "21/03/2025",
        "afternoon",
        "morning",
    ))
    .await;

    assert_eq!(body["selection"]["working_day_count"], 10);
    assert_eq!(decimal_at(&body["selection"]["effective_days"]), decimal("9"));
}

#[tokio::test]
async fn test_iso_dates_are_accepted() {
    let (status, body) =
        post_selection(selection_request("2025-03-10", "2025-03-14", "FD", "FD")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selection"]["working_day_count"], 5);
}

#[tokio::test]
async fn test_reversed_range_normalizes_identically() {
    let (_, forward) =
        post_selection(selection_request("10/03/2025", "14/03/2025", "FD", "FD")).await;
    let (_, reversed) =
        post_selection(selection_request("14/03/2025", "10/03/2025", "FD", "FD")).await;

    assert_eq!(forward["selection"], reversed["selection"]);
}

// =============================================================================
// Exclusions
// =============================================================================

#[tokio::test]
async fn test_public_holidays_are_not_charged() {
    // Good Friday and Easter Monday 2025
    let mut request = selection_request("14/04/2025", "22/04/2025", "FD", "FD");
    request["entitlement"] = entitlement("15", vec!["18/04/2025", "21/04/2025"]);

    let (_, body) = post_selection(request).await;

    assert_eq!(body["selection"]["working_day_count"], 5);
    assert_eq!(decimal_at(&body["selection"]["effective_days"]), decimal("5"));
}

#[tokio::test]
async fn test_public_holiday_on_boundary_moves_half_day() {
    // Range starts on Good Friday: the first chargeable day becomes Tuesday.
    let mut request = selection_request("18/04/2025", "25/04/2025", "PM", "FD");
    request["entitlement"] = entitlement("15", vec!["18/04/2025", "21/04/2025"]);

    let (_, body) = post_selection(request).await;

    assert_eq!(body["selection"]["normalized_start"], "2025-04-22");
    assert_eq!(body["selection"]["working_day_count"], 4);
    assert_eq!(decimal_at(&body["selection"]["effective_days"]), decimal("3.5"));
}

#[tokio::test]
async fn test_range_of_only_public_holidays_has_no_selection() {
    let mut request = selection_request("18/04/2025", "21/04/2025", "FD", "FD");
    request["entitlement"] = entitlement("15", vec!["18/04/2025", "21/04/2025"]);

    let (status, body) = post_selection(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "validated");
    assert_eq!(body["selection"]["has_selection"], false);
    assert_eq!(decimal_at(&body["selection"]["effective_days"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_custom_working_pattern() {
    let mut request = selection_request("10/03/2025", "19/03/2025", "FD", "FD");
    // Monday and Wednesday only, one id sent as a string
    request["entitlement"]["workhours"] = json!([{"day_id": 1}, {"day_id": "3"}]);

    let (_, body) = post_selection(request).await;

    assert_eq!(body["status"], "validated");
    assert_eq!(body["selection"]["working_day_count"], 4);
}

#[tokio::test]
async fn test_missing_workhours_falls_back_to_policy_pattern() {
    let mut request = selection_request("10/03/2025", "14/03/2025", "FD", "FD");
    request["entitlement"]["workhours"] = Value::Null;

    let (_, body) = post_selection(request).await;

    assert_eq!(body["selection"]["working_day_count"], 5);
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_range_crossing_holiday_year_end_is_rejected() {
    let (status, body) =
        post_selection(selection_request("28/11/2025", "02/12/2025", "FD", "FD")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "rejected");
    assert_eq!(body["reason"], "Outside holiday year");
    assert_eq!(body["selection"]["has_selection"], false);
}

#[tokio::test]
async fn test_weekend_endpoint_is_rejected() {
    let (_, body) =
        post_selection(selection_request("10/03/2025", "15/03/2025", "FD", "FD")).await;

    assert_eq!(body["status"], "rejected");
    assert_eq!(body["reason"], "Non-working day selected");
}

#[tokio::test]
async fn test_single_endpoint_is_no_selection() {
    let mut request = selection_request("10/03/2025", "", "FD", "FD");
    request["end_date"] = Value::Null;

    let (status, body) = post_selection(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "no_selection");
    assert!(body.get("reason").is_none());
}

#[tokio::test]
async fn test_holiday_year_derived_from_today() {
    let request = json!({
        "today": "2025-12-15",
        "start_date": "15/12/2025",
        "end_date": "19/12/2025",
        "entitlement": entitlement("20", vec![])
    });

    let (_, body) = post_selection(request).await;

    assert_eq!(body["holiday_year"]["year"], 2026);
    assert_eq!(body["holiday_year"]["start"], "2025-12-01");
    assert_eq!(body["holiday_year"]["end"], "2026-11-30");
    assert_eq!(body["status"], "validated");
}

// =============================================================================
// Balance
// =============================================================================

#[tokio::test]
async fn test_balance_within_remaining() {
    let (_, body) =
        post_selection(selection_request("10/03/2025", "14/03/2025", "PM", "FD")).await;

    assert_eq!(decimal_at(&body["balance"]["remaining_before"]), decimal("15"));
    assert_eq!(decimal_at(&body["balance"]["requested"]), decimal("4.5"));
    assert_eq!(decimal_at(&body["balance"]["remaining_after"]), decimal("10.5"));
    assert_eq!(body["balance"]["exceeds"], false);
}

#[tokio::test]
async fn test_balance_exceeded_is_flagged() {
    let mut request = selection_request("10/03/2025", "14/03/2025", "FD", "FD");
    request["entitlement"]["remaining_holiday"] = json!(3.0);

    let (status, body) = post_selection(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"]["exceeds"], true);
    assert_eq!(decimal_at(&body["balance"]["remaining_after"]), decimal("-2"));
}

#[tokio::test]
async fn test_unparseable_balance_reads_as_zero() {
    let mut request = selection_request("10/03/2025", "10/03/2025", "FD", "FD");
    request["entitlement"]["remaining_holiday"] = json!("n/a");

    let (_, body) = post_selection(request).await;

    assert_eq!(decimal_at(&body["balance"]["remaining_before"]), Decimal::ZERO);
    assert_eq!(body["balance"]["exceeds"], true);
}

#[tokio::test]
async fn test_non_deducting_leave_type_never_exceeds() {
    let mut request = selection_request("10/03/2025", "14/03/2025", "FD", "FD");
    request["leave_type"] = json!("Unpaid Leave");
    request["entitlement"]["remaining_holiday"] = json!("0");

    let (_, body) = post_selection(request).await;

    assert_eq!(decimal_at(&body["selection"]["effective_days"]), decimal("5"));
    assert_eq!(decimal_at(&body["balance"]["requested"]), Decimal::ZERO);
    assert_eq!(body["balance"]["exceeds"], false);
}

// =============================================================================
// Submission
// =============================================================================

fn submission_request(start: &str, end: &str, start_part: &str, end_part: &str) -> Value {
    let mut request = selection_request(start, end, start_part, end_part);
    request["employee_id"] = json!("emp_001");
    request["note"] = json!("  Family trip  ");
    request
}

#[tokio::test]
async fn test_submission_builds_payload() {
    let (status, body) =
        post_submission(submission_request("10/03/2025", "14/03/2025", "PM", "FD")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["start_date"], "10/03/2025");
    assert_eq!(body["end_date"], "14/03/2025");
    assert_eq!(body["holiday_year"], 2025);
    assert_eq!(body["type"], "Annual Leave");
    assert_eq!(body["employee_id"], "emp_001");
    assert_eq!(body["portal_id"], "portal_01");
    assert_eq!(body["note"], "Family trip");
    assert_eq!(body["start_day_part"], "PM");
    assert_eq!(body["end_day_part"], "FD");
    assert_eq!(body["duration_days"], json!(4.5));
}

#[tokio::test]
async fn test_submission_uses_normalized_dates() {
    let mut request = submission_request("18/04/2025", "25/04/2025", "FD", "FD");
    request["entitlement"] = entitlement("15", vec!["18/04/2025", "21/04/2025"]);
    request["employee_id"] = json!("emp_001");

    let (_, body) = post_submission(request).await;

    assert_eq!(body["start_date"], "22/04/2025");
    assert_eq!(body["end_date"], "25/04/2025");
    assert_eq!(body["duration_days"], json!(4.0));
}

#[tokio::test]
async fn test_submission_blank_note_is_omitted() {
    let mut request = submission_request("10/03/2025", "14/03/2025", "FD", "FD");
    request["note"] = json!("   ");

    let (_, body) = post_submission(request).await;

    assert!(body.get("note").is_none());
}

#[tokio::test]
async fn test_submission_exceeding_balance_still_builds_payload() {
    let mut request = submission_request("10/03/2025", "14/03/2025", "FD", "FD");
    request["entitlement"]["remaining_holiday"] = json!("3.0");

    let (status, body) = post_submission(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["duration_days"], json!(5.0));
}

#[tokio::test]
async fn test_submission_of_rejected_range_returns_422() {
    let (status, body) =
        post_submission(submission_request("28/11/2025", "02/12/2025", "FD", "FD")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "POLICY_VIOLATION");
    assert_eq!(body["message"], "Outside holiday year");
}

#[tokio::test]
async fn test_submission_of_empty_selection_returns_422() {
    let mut request = submission_request("18/04/2025", "21/04/2025", "FD", "FD");
    request["entitlement"] = entitlement("15", vec!["18/04/2025", "21/04/2025"]);
    request["employee_id"] = json!("emp_001");

    let (status, body) = post_submission(request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "EMPTY_SELECTION");
}

#[tokio::test]
async fn test_submission_without_dates_returns_422() {
    let request = json!({ "holiday_year": 2025, "employee_id": "emp_001" });

    let (status, body) = post_submission(request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "EMPTY_SELECTION");
}

#[tokio::test]
async fn test_submission_unknown_leave_type_returns_400() {
    let mut request = submission_request("10/03/2025", "14/03/2025", "FD", "FD");
    request["leave_type"] = json!("Sabbatical");

    let (status, body) = post_submission(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "LEAVE_TYPE_NOT_FOUND");
}

// =============================================================================
// History
// =============================================================================

#[tokio::test]
async fn test_history_normalizes_and_excludes() {
    let request = json!({
        "records": [
            {
                "start_date": "06/01/2025",
                "end_date": "10/01/2025",
                "days": 5,
                "holiday_type": "Annual Leave",
                "request_status": "Approved"
            },
            {
                "date_from": "03/02/2025",
                "date_till": "03/02/2025",
                "days": "0.5",
                "type": "Compassionate Leave"
            },
            { "date": "2025-02-14" },
            { "from": "garbage", "till": "14/02/2025" },
            { "status": "Approved" }
        ]
    });

    let (status, body) = post_json(create_router_for_test(), "/history", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["excluded"], 2);

    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0]["start_date"], "2025-01-06");
    assert_eq!(decimal_at(&entries[0]["days"]), decimal("5"));
    assert_eq!(entries[0]["request_status"], "Approved");

    assert_eq!(entries[1]["holiday_type"], "Compassionate Leave");
    assert_eq!(entries[1]["request_status"], "Pending");
    assert_eq!(decimal_at(&entries[1]["days"]), decimal("0.5"));

    assert_eq!(entries[2]["start_date"], "2025-02-14");
    assert_eq!(entries[2]["end_date"], "2025-02-14");
    assert_eq!(decimal_at(&entries[2]["days"]), decimal("1"));
    assert_eq!(entries[2]["holiday_type"], "Annual Leave");
}

// =============================================================================
// Calendar
// =============================================================================

#[tokio::test]
async fn test_calendar_classifies_month() {
    let mut ent = entitlement("15", vec!["18/04/2025", "21/04/2025"]);
    ent["holiday_dates"] = json!(["08/04/2025", "09/04/2025"]);
    let request = json!({
        "year": 2025,
        "month": 4,
        "holiday_year": 2025,
        "entitlement": ent
    });

    let (status, body) = post_json(create_router_for_test(), "/calendar", request).await;

    assert_eq!(status, StatusCode::OK);
    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 30);

    let status_of = |day: usize| days[day - 1]["status"].as_str().unwrap().to_string();
    assert_eq!(status_of(7), "working");
    assert_eq!(status_of(8), "booked");
    assert_eq!(status_of(12), "non_working");
    assert_eq!(status_of(18), "public_holiday");
    assert_eq!(status_of(21), "public_holiday");
}

#[tokio::test]
async fn test_calendar_outside_holiday_year() {
    let request = json!({ "year": 2025, "month": 12, "holiday_year": 2025 });

    let (_, body) = post_json(create_router_for_test(), "/calendar", request).await;

    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 31);
    assert!(days.iter().all(|d| d["status"] == "outside_holiday_year"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/selection")
                .header("Content-Type", "application/json")
                .body(Body::from("{\"start_date\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/selection")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_calendar_missing_field_returns_validation_error() {
    let (status, body) =
        post_json(create_router_for_test(), "/calendar", json!({ "month": 3 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("year"));
}

#[tokio::test]
async fn test_invalid_day_part_returns_400() {
    let (status, body) =
        post_selection(selection_request("10/03/2025", "14/03/2025", "EVENING", "FD")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_impossible_date_returns_invalid_date() {
    let (status, body) =
        post_selection(selection_request("31/02/2025", "14/03/2025", "FD", "FD")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE");
}

#[tokio::test]
async fn test_unrepresentable_holiday_year_returns_400() {
    for label in [i32::MIN, i32::MAX] {
        let mut request = selection_request("10/03/2025", "14/03/2025", "FD", "FD");
        request["holiday_year"] = json!(label);

        let (status, body) = post_selection(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_HOLIDAY_YEAR");
    }

    let request = json!({ "year": 2025, "month": 3, "holiday_year": i32::MIN });
    let (status, body) = post_json(create_router_for_test(), "/calendar", request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_HOLIDAY_YEAR");
}
