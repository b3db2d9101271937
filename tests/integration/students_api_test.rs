// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{create_student, student_body, test_server, TEST_TOKEN};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn create_student_returns_stored_record() {
    let server = test_server();
    let created = create_student(
        &server,
        &student_body("John Doe", "2023-04-01", "2023-05-01", Some(5)),
    )
    .await;

    assert_eq!(created["name"], "John Doe");
    assert_eq!(created["phoneNumber"], "9876543210");
    assert_eq!(created["timeSlot"], "6hr");
    assert_eq!(created["seatNumber"], 5);
    assert_eq!(created["isPaid"], true);
    assert_eq!(created["daysCount"], 30);
    assert!(created["id"].is_string());
}

#[tokio::test]
async fn create_student_rejects_missing_name() {
    let server = test_server();
    let response = server
        .post("/v1/students")
        .authorization_bearer(TEST_TOKEN)
        .json(&json!({
            "name": "",
            "phoneNumber": "9876543210",
            "timeSlot": "6hr",
            "startDate": "2023-04-01",
            "endDate": "2023-05-01",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn create_student_rejects_inverted_dates() {
    let server = test_server();
    let response = server
        .post("/v1/students")
        .authorization_bearer(TEST_TOKEN)
        .json(&student_body("John", "2023-05-01", "2023-04-01", None))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().contains("endDate"));
}

#[tokio::test]
async fn list_students_supports_search_and_filters() {
    let server = test_server();
    create_student(
        &server,
        &student_body("John Doe", "2023-04-01", "2023-05-01", Some(5)),
    )
    .await;
    create_student(
        &server,
        &json!({
            "name": "Jane Smith",
            "phoneNumber": "8765432109",
            "timeSlot": "12hr",
            "startDate": "2023-04-05",
            "endDate": "2023-05-05",
            "seatNumber": 10,
            "paymentAmount": 800.0,
        }),
    )
    .await;
    create_student(
        &server,
        &json!({
            "name": "Raj Kumar",
            "phoneNumber": "7654321098",
            "timeSlot": "24hr",
            "startDate": "2023-04-10",
            "endDate": "2023-05-10",
            "village": "Blue Village",
        }),
    )
    .await;

    let all = server
        .get("/v1/students")
        .authorization_bearer(TEST_TOKEN)
        .await
        .json::<Vec<Value>>();
    assert_eq!(all.len(), 3);

    // 搜索词不区分大小写
    let found = server
        .get("/v1/students")
        .authorization_bearer(TEST_TOKEN)
        .add_query_param("search", "jane")
        .await
        .json::<Vec<Value>>();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Jane Smith");

    // 座位号精确匹配
    let found = server
        .get("/v1/students")
        .authorization_bearer(TEST_TOKEN)
        .add_query_param("search", "10")
        .await
        .json::<Vec<Value>>();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["seatNumber"], 10);

    // 时段过滤
    let found = server
        .get("/v1/students")
        .authorization_bearer(TEST_TOKEN)
        .add_query_param("timeSlot", "24hr")
        .await
        .json::<Vec<Value>>();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Raj Kumar");

    // 缴费状态过滤：Raj未缴费
    let found = server
        .get("/v1/students")
        .authorization_bearer(TEST_TOKEN)
        .add_query_param("paymentStatus", "unpaid")
        .await
        .json::<Vec<Value>>();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["isPaid"], false);
}

#[tokio::test]
async fn get_student_returns_404_for_unknown_id() {
    let server = test_server();
    let response = server
        .get(&format!("/v1/students/{}", uuid::Uuid::new_v4()))
        .authorization_bearer(TEST_TOKEN)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_student_merges_patch_fields() {
    let server = test_server();
    let created = create_student(
        &server,
        &student_body("John", "2023-04-01", "2023-05-01", None),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/v1/students/{}", id))
        .authorization_bearer(TEST_TOKEN)
        .json(&json!({ "paymentAmount": 800.0, "village": "Green Village" }))
        .await;
    response.assert_status_ok();
    let updated = response.json::<Value>();
    assert_eq!(updated["paymentAmount"], 800.0);
    assert_eq!(updated["village"], "Green Village");
    assert_eq!(updated["name"], "John");
}

#[tokio::test]
async fn update_with_empty_patch_returns_record_unchanged() {
    let server = test_server();
    let created = create_student(
        &server,
        &student_body("John", "2023-04-01", "2023-05-01", Some(3)),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/v1/students/{}", id))
        .authorization_bearer(TEST_TOKEN)
        .json(&json!({}))
        .await;
    response.assert_status_ok();
    let unchanged = response.json::<Value>();
    assert_eq!(unchanged["name"], created["name"]);
    assert_eq!(unchanged["seatNumber"], created["seatNumber"]);
    assert_eq!(unchanged["updatedAt"], created["updatedAt"]);
}

#[tokio::test]
async fn delete_student_then_404() {
    let server = test_server();
    let created = create_student(
        &server,
        &student_body("John", "2023-04-01", "2023-05-01", None),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = server
        .delete(&format!("/v1/students/{}", id))
        .authorization_bearer(TEST_TOKEN)
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server
        .delete(&format!("/v1/students/{}", id))
        .authorization_bearer(TEST_TOKEN)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
