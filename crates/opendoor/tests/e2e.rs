// SPDX-FileCopyrightText: 2026 Opendoor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end integration tests for the complete USSD pipeline.
//!
//! Each test creates an isolated TestHarness with a temp SQLite store and
//! drives the gateway router the way the aggregator would: one form-encoded
//! POST per dialogue turn. Tests are independent and order-insensitive.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use opendoor_core::PropertyStore;
use opendoor_gateway::{routes, GatewayState};
use opendoor_menu::SessionMachine;
use opendoor_test_utils::TestHarness;

fn router_for(harness: &TestHarness) -> Router {
    let machine = Arc::new(SessionMachine::new(harness.store.clone()));
    routes(GatewayState { machine })
}

fn callback(harness: &TestHarness, text: &str) -> Request<Body> {
    let body = serde_urlencoded::to_string([
        ("sessionId", harness.session_id.as_str()),
        ("serviceCode", harness.service_code.as_str()),
        ("phoneNumber", harness.phone_number.as_str()),
        ("text", text),
    ])
    .unwrap();
    Request::builder()
        .method("POST")
        .uri("/ussd")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn reply(router: &Router, harness: &TestHarness, text: &str) -> String {
    let response = router
        .clone()
        .oneshot(callback(harness, text))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---- Test 1: First request serves the main menu ----

#[tokio::test]
async fn test_first_request_serves_main_menu() {
    let harness = TestHarness::new().await.unwrap();
    let router = router_for(&harness);

    let body = reply(&router, &harness, "").await;
    assert!(body.starts_with("CON Welcome to OPEN DOOR PROPERTY"));
    for option in [
        "1. New Tenant (Register)",
        "2. Existing Tenant",
        "3. Report an Issue",
        "4. Pay Rent and Utilities",
        "5. Need Help",
        "6. Terms of Service",
    ] {
        assert!(body.contains(option), "menu missing {option:?}");
    }
}

// ---- Test 2: Full registration dialogue ----

#[tokio::test]
async fn test_registration_dialogue_step_by_step() {
    let harness = TestHarness::new().await.unwrap();
    let router = router_for(&harness);

    let body = reply(&router, &harness, "1").await;
    assert_eq!(body, "CON Please provide your full name:");

    let body = reply(&router, &harness, "1*Jane Doe").await;
    assert_eq!(body, "CON Hello Jane Doe, please enter your door number:");

    let body = reply(&router, &harness, "1*Jane Doe*12A").await;
    assert!(body.starts_with("CON Thank you, Jane Doe. Your door number is 12A."));
    assert!(body.contains("Please enter your ID number:"));

    let body = reply(&router, &harness, "1*Jane Doe*12A*ID555").await;
    assert!(body.starts_with("END Registration successful!"));
    assert!(body.contains("Full Name: Jane Doe"));
    assert!(body.contains("Door Number: 12A"));
    assert!(body.contains("ID Number: ID555"));

    // The tenant row carries the caller identifiers from the form.
    let tenant = harness.store.find_tenant("ID555").await.unwrap().unwrap();
    assert_eq!(tenant.full_name, "Jane Doe");
    assert_eq!(tenant.phone_number, harness.phone_number);
    assert_eq!(tenant.session_id, harness.session_id);
}

// ---- Test 3: Duplicate registration ----

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let harness = TestHarness::new().await.unwrap();
    let router = router_for(&harness);

    let body = reply(&router, &harness, "1*Jane Doe*12A*ID555").await;
    assert!(body.starts_with("END Registration successful!"));

    let body = reply(&router, &harness, "1*Someone Else*9Z*ID555").await;
    assert_eq!(body, "END Registration failed. ID number already exists.");

    // The original registration is untouched.
    let tenant = harness.store.find_tenant("ID555").await.unwrap().unwrap();
    assert_eq!(tenant.full_name, "Jane Doe");
}

// ---- Test 4: Tenant lookup ----

#[tokio::test]
async fn test_lookup_round_trip() {
    let harness = TestHarness::new().await.unwrap();
    let router = router_for(&harness);

    let body = reply(&router, &harness, "2*ID404").await;
    assert_eq!(body, "END No tenant found with ID number: ID404.");

    reply(&router, &harness, "1*Jane Doe*12A*ID555").await;

    let body = reply(&router, &harness, "2").await;
    assert_eq!(body, "CON Enter your ID Number:");

    let body = reply(&router, &harness, "2*ID555").await;
    assert!(body.starts_with("END Tenant Details:"));
    assert!(body.contains("Name: Jane Doe"));
    assert!(body.contains("Door Number: 12A"));
    assert!(body.contains("ID Number: ID555"));
}

// ---- Test 5: Issue reporting ----

#[tokio::test]
async fn test_issue_report_flow() {
    let harness = TestHarness::new().await.unwrap();
    let router = router_for(&harness);

    let body = reply(&router, &harness, "3").await;
    assert_eq!(body, "CON Enter your ID Number:");

    let body = reply(&router, &harness, "3*ID555").await;
    assert_eq!(body, "CON Thank you. Please describe the issue:");

    let body = reply(&router, &harness, "3*ID555*Leaking kitchen tap").await;
    assert_eq!(
        body,
        "END Thank you for reporting the issue. Our team will address it shortly."
    );
}

// ---- Test 6: Payments ----

#[tokio::test]
async fn test_payment_mpesa_flow() {
    let harness = TestHarness::new().await.unwrap();
    let router = router_for(&harness);

    reply(&router, &harness, "1*Jane Doe*12A*ID555").await;

    let body = reply(&router, &harness, "4").await;
    assert_eq!(body, "CON Enter your ID Number:");

    let body = reply(&router, &harness, "4*ID555").await;
    assert!(body.starts_with("CON Hello Jane Doe, kindly choose a payment method:"));
    assert!(body.contains("1. M-Pesa"));
    assert!(body.contains("2. Bank"));

    let body = reply(&router, &harness, "4*ID555*1").await;
    assert!(body.starts_with("END Payment successful via M-Pesa."));
}

#[tokio::test]
async fn test_payment_bank_flow() {
    let harness = TestHarness::new().await.unwrap();
    let router = router_for(&harness);

    reply(&router, &harness, "1*Jane Doe*12A*ID555").await;

    let body = reply(&router, &harness, "4*ID555*2").await;
    assert_eq!(body, "CON Enter your Bank PIN:");

    let body = reply(&router, &harness, "4*ID555*2*9999").await;
    assert!(body.starts_with("END Payment successful via Bank."));
}

#[tokio::test]
async fn test_payment_requires_registration() {
    let harness = TestHarness::new().await.unwrap();
    let router = router_for(&harness);

    let body = reply(&router, &harness, "4*ID404").await;
    assert!(body.starts_with("END No tenant found with ID number: ID404."));
    assert!(body.contains("Please register as a new tenant to proceed."));
}

// ---- Test 7: Unknown branch ----

#[tokio::test]
async fn test_unknown_branch_is_politely_rejected() {
    let harness = TestHarness::new().await.unwrap();
    let router = router_for(&harness);

    let body = reply(&router, &harness, "9").await;
    assert_eq!(body, "END Invalid option. Please try again.");
}

// ---- Test 8: Liveness probe ----

#[tokio::test]
async fn test_health_probe() {
    let harness = TestHarness::new().await.unwrap();
    let router = router_for(&harness);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(
        String::from_utf8(bytes.to_vec()).unwrap(),
        "Connection was established"
    );
}

// ---- Test 9: Independent test isolation ----

#[tokio::test]
async fn test_harness_isolation() {
    let h1 = TestHarness::new().await.unwrap();
    let h2 = TestHarness::new().await.unwrap();
    let r1 = router_for(&h1);
    let r2 = router_for(&h2);

    let body = reply(&r1, &h1, "1*Jane Doe*12A*ID555").await;
    assert!(body.starts_with("END Registration successful!"));

    // h2 has its own temp database, so the tenant is unknown there.
    let body = reply(&r2, &h2, "2*ID555").await;
    assert_eq!(body, "END No tenant found with ID number: ID555.");
}
