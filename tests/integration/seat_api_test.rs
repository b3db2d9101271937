// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{create_student, student_body, test_server, TEST_TOKEN};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn assign_seat_commits_and_shows_in_occupancy() {
    let server = test_server();
    let created = create_student(
        &server,
        &student_body("John", "2023-04-01", "2023-05-01", None),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = server
        .post(&format!("/v1/students/{}/seat", id))
        .authorization_bearer(TEST_TOKEN)
        .json(&json!({ "seatNumber": 7 }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["seatNumber"], 7);

    let occupancy = server
        .get("/v1/seats/occupancy")
        .authorization_bearer(TEST_TOKEN)
        .add_query_param("date", "2023-04-15")
        .await
        .json::<Value>();
    let seats = occupancy["seats"].as_array().unwrap();
    assert_eq!(seats.len(), 80);
    assert_eq!(seats[6]["seatNumber"], 7);
    assert_eq!(seats[6]["occupied"], true);
    assert_eq!(seats[0]["occupied"], false);
}

#[tokio::test]
async fn assign_seat_rejects_overlapping_enrollment() {
    let server = test_server();
    create_student(
        &server,
        &student_body("A", "2023-04-01", "2023-05-01", Some(5)),
    )
    .await;
    let other = create_student(
        &server,
        &student_body("B", "2023-04-15", "2023-04-20", None),
    )
    .await;
    let id = other["id"].as_str().unwrap();

    let response = server
        .post(&format!("/v1/students/{}/seat", id))
        .authorization_bearer(TEST_TOKEN)
        .json(&json!({ "seatNumber": 5 }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().contains("seat 5"));
}

#[tokio::test]
async fn assign_seat_allows_disjoint_range() {
    let server = test_server();
    create_student(
        &server,
        &student_body("A", "2023-04-01", "2023-05-01", Some(5)),
    )
    .await;
    let other = create_student(
        &server,
        &student_body("B", "2023-05-02", "2023-05-10", None),
    )
    .await;
    let id = other["id"].as_str().unwrap();

    let response = server
        .post(&format!("/v1/students/{}/seat", id))
        .authorization_bearer(TEST_TOKEN)
        .json(&json!({ "seatNumber": 5 }))
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn assign_seat_rejects_out_of_range() {
    let server = test_server();
    let created = create_student(
        &server,
        &student_body("John", "2023-04-01", "2023-05-01", None),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    for seat in [0u32, 81] {
        let response = server
            .post(&format!("/v1/students/{}/seat", id))
            .authorization_bearer(TEST_TOKEN)
            .json(&json!({ "seatNumber": seat }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn create_rejects_seat_conflict_directly() {
    let server = test_server();
    create_student(
        &server,
        &student_body("A", "2023-04-01", "2023-05-01", Some(5)),
    )
    .await;

    let response = server
        .post("/v1/students")
        .authorization_bearer(TEST_TOKEN)
        .json(&student_body("B", "2023-04-15", "2023-04-20", Some(5)))
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn available_seats_excludes_taken_range() {
    let server = test_server();
    create_student(
        &server,
        &student_body("A", "2023-04-01", "2023-05-01", Some(5)),
    )
    .await;

    let body = server
        .get("/v1/seats/available")
        .authorization_bearer(TEST_TOKEN)
        .add_query_param("startDate", "2023-04-15")
        .add_query_param("endDate", "2023-04-20")
        .await
        .json::<Value>();
    let seats: Vec<u64> = body["availableSeats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .collect();
    assert_eq!(seats.len(), 79);
    assert!(!seats.contains(&5));

    // 开放结束日期按无界处理，座位5仍然不可用
    let body = server
        .get("/v1/seats/available")
        .authorization_bearer(TEST_TOKEN)
        .add_query_param("startDate", "2023-03-01")
        .await
        .json::<Value>();
    let seats = body["availableSeats"].as_array().unwrap();
    assert_eq!(seats.len(), 79);

    // 完全错开的范围内80个座位全部可用
    let body = server
        .get("/v1/seats/available")
        .authorization_bearer(TEST_TOKEN)
        .add_query_param("startDate", "2023-05-02")
        .add_query_param("endDate", "2023-05-10")
        .await
        .json::<Value>();
    assert_eq!(body["availableSeats"].as_array().unwrap().len(), 80);
}
