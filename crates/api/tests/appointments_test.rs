mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use roombook_core::models::appointment::Appointment;
use roombook_db::mock::MockStore;
use serde_json::Value;

use common::{create_payload, server_with_store, test_server};

#[tokio::test]
async fn test_create_list_round_trip() {
    let server = test_server();

    let response = server
        .post("/api/appointments")
        .json(&serde_json::json!({
            "name": "Alice",
            "date": "2025-02-15",
            "start_time": "14:00",
            "end_time": "15:00",
            "title": "Design review",
            "participants": "Alice, Bob",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let created: Appointment = response.json();
    assert_eq!(created.name, "Alice");
    assert_eq!(created.title, "Design review");
    assert_eq!(created.participants, Some("Alice, Bob".to_string()));

    let listed: Vec<Appointment> = server.get("/api/appointments/2025-02-15").await.json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].name, created.name);
    assert_eq!(listed[0].date, created.date);
    assert_eq!(listed[0].start_time, created.start_time);
    assert_eq!(listed[0].end_time, created.end_time);
    assert_eq!(listed[0].title, created.title);
    assert_eq!(listed[0].participants, created.participants);
    assert_eq!(listed[0].created_at, created.created_at);
}

#[tokio::test]
async fn test_booking_scenario_conflict_and_touching() {
    let server = test_server();

    // First booking succeeds
    let first = server
        .post("/api/appointments")
        .json(&create_payload("A", "2025-02-15", "14:00", "15:00", "T1"))
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);

    // Overlapping booking fails, naming the collider
    let overlapping = server
        .post("/api/appointments")
        .json(&create_payload("B", "2025-02-15", "14:30", "15:30", "T2"))
        .await;
    assert_eq!(overlapping.status_code(), StatusCode::CONFLICT);
    let body: Value = overlapping.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("T1"), "conflict message was: {message}");
    assert!(message.contains("A"), "conflict message was: {message}");

    // Touching booking succeeds: half-open intervals
    let touching = server
        .post("/api/appointments")
        .json(&create_payload("B", "2025-02-15", "15:00", "15:30", "T2"))
        .await;
    assert_eq!(touching.status_code(), StatusCode::OK);

    // The failed create left no record behind
    let listed: Vec<Appointment> = server.get("/api/appointments/2025-02-15").await.json();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title, "T1");
    assert_eq!(listed[1].title, "T2");
}

#[tokio::test]
async fn test_same_interval_free_on_another_date() {
    let server = test_server();

    let saturday = server
        .post("/api/appointments")
        .json(&create_payload("A", "2025-02-15", "14:00", "15:00", "T1"))
        .await;
    assert_eq!(saturday.status_code(), StatusCode::OK);

    let sunday = server
        .post("/api/appointments")
        .json(&create_payload("B", "2025-02-16", "14:00", "15:00", "T2"))
        .await;
    assert_eq!(sunday.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_concurrent_creates_cannot_both_succeed() {
    let server = test_server();

    let (left, right) = tokio::join!(
        server
            .post("/api/appointments")
            .json(&create_payload("A", "2025-02-15", "09:00", "10:00", "T1")),
        server
            .post("/api/appointments")
            .json(&create_payload("B", "2025-02-15", "09:30", "10:30", "T2")),
    );

    let codes = [left.status_code(), right.status_code()];
    assert!(codes.contains(&StatusCode::OK), "statuses: {codes:?}");
    assert!(codes.contains(&StatusCode::CONFLICT), "statuses: {codes:?}");

    let listed: Vec<Appointment> = server.get("/api/appointments/2025-02-15").await.json();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
    let server = test_server();

    let inverted = server
        .post("/api/appointments")
        .json(&create_payload("A", "2025-02-15", "15:00", "14:00", "T1"))
        .await;
    assert_eq!(inverted.status_code(), StatusCode::BAD_REQUEST);

    let zero_length = server
        .post("/api/appointments")
        .json(&create_payload("A", "2025-02-15", "14:00", "14:00", "T1"))
        .await;
    assert_eq!(zero_length.status_code(), StatusCode::BAD_REQUEST);

    let empty_name = server
        .post("/api/appointments")
        .json(&create_payload("", "2025-02-15", "14:00", "15:00", "T1"))
        .await;
    assert_eq!(empty_name.status_code(), StatusCode::BAD_REQUEST);

    let empty_title = server
        .post("/api/appointments")
        .json(&create_payload("A", "2025-02-15", "14:00", "15:00", "  "))
        .await;
    assert_eq!(empty_title.status_code(), StatusCode::BAD_REQUEST);

    // Nothing was stored
    let listed: Vec<Appointment> = server.get("/api/appointments/2025-02-15").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_list_by_date_orders_by_start_time() {
    let server = test_server();

    for (start, end, title) in [
        ("16:00", "17:00", "Late"),
        ("09:00", "10:00", "Early"),
        ("12:00", "13:00", "Midday"),
    ] {
        let response = server
            .post("/api/appointments")
            .json(&create_payload("A", "2025-02-15", start, end, title))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let listed: Vec<Appointment> = server.get("/api/appointments/2025-02-15").await.json();
    let titles: Vec<_> = listed.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Early", "Midday", "Late"]);
}

#[tokio::test]
async fn test_list_all_orders_by_date_then_start_time() {
    let server = test_server();

    for (date, start, end, title) in [
        ("2025-02-16", "09:00", "10:00", "Third"),
        ("2025-02-15", "14:00", "15:00", "Second"),
        ("2025-02-15", "09:00", "10:00", "First"),
    ] {
        let response = server
            .post("/api/appointments")
            .json(&create_payload("A", date, start, end, title))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let listed: Vec<Appointment> = server.get("/api/appointments").await.json();
    let titles: Vec<_> = listed.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn test_list_by_malformed_date_is_client_error() {
    let server = test_server();

    let response = server.get("/api/appointments/not-a-date").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("not-a-date"));
}

#[tokio::test]
async fn test_delete_lifecycle() {
    let server = test_server();

    let created: Appointment = server
        .post("/api/appointments")
        .json(&create_payload("A", "2025-02-15", "14:00", "15:00", "T1"))
        .await
        .json();

    let deleted = server
        .delete(&format!("/api/appointments/{}", created.id))
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);
    let body: Value = deleted.json();
    assert_eq!(body["message"], "Appointment deleted successfully");

    // Second delete of the same id is NotFound
    let again = server
        .delete(&format!("/api/appointments/{}", created.id))
        .await;
    assert_eq!(again.status_code(), StatusCode::NOT_FOUND);

    let listed: Vec<Appointment> = server.get("/api/appointments/2025-02-15").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let server = test_server();

    let response = server
        .delete("/api/appointments/00000000-0000-0000-0000-000000000000")
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_malformed_id_is_client_error() {
    let server = test_server();

    let response = server.delete("/api/appointments/definitely-not-a-uuid").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_store_failure_surfaces_as_server_error() {
    let mut store = MockStore::new();
    store
        .expect_find_by_date()
        .returning(|_| Err(eyre::eyre!("connection refused")));

    let server = server_with_store(Arc::new(store));

    let response = server.get("/api/appointments/2025-02-15").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
