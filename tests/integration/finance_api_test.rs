// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{create_student, student_body, test_server, TEST_TOKEN};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn monthly_summary_counts_start_month_enrollments() {
    let server = test_server();
    create_student(
        &server,
        &student_body("John", "2023-04-10", "2023-05-10", None),
    )
    .await;

    let body = server
        .get("/v1/finance/monthly/2023-04")
        .authorization_bearer(TEST_TOKEN)
        .await
        .json::<Value>();
    assert_eq!(body["month"], "2023-04");
    assert_eq!(body["amount"], 500.0);
    assert_eq!(body["count"], 1);

    // 周期虽跨入5月，但按开始日期不计入5月
    let body = server
        .get("/v1/finance/monthly/2023-05")
        .authorization_bearer(TEST_TOKEN)
        .await
        .json::<Value>();
    assert_eq!(body["amount"], 0.0);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn monthly_summary_rejects_malformed_month() {
    let server = test_server();
    for month in ["2023-13", "2023-4", "april", "2023/04"] {
        let response = server
            .get(&format!("/v1/finance/monthly/{}", month))
            .authorization_bearer(TEST_TOKEN)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn totals_cover_all_records() {
    let server = test_server();
    create_student(
        &server,
        &student_body("A", "2023-03-15", "2023-04-15", None),
    )
    .await;
    create_student(
        &server,
        &student_body("B", "2023-04-01", "2023-05-01", None),
    )
    .await;
    // 未缴费学员计入人数但不计入金额
    create_student(
        &server,
        &json!({
            "name": "C",
            "phoneNumber": "7654321098",
            "timeSlot": "24hr",
            "startDate": "2023-05-05",
            "endDate": "2023-06-05",
        }),
    )
    .await;

    let body = server
        .get("/v1/finance/totals")
        .authorization_bearer(TEST_TOKEN)
        .await
        .json::<Value>();
    assert_eq!(body["totalAmount"], 1000.0);
    assert_eq!(body["studentCount"], 3);

    // 月度之和与全量一致
    let mut amount = 0.0;
    let mut count = 0;
    for month in ["2023-03", "2023-04", "2023-05"] {
        let summary = server
            .get(&format!("/v1/finance/monthly/{}", month))
            .authorization_bearer(TEST_TOKEN)
            .await
            .json::<Value>();
        amount += summary["amount"].as_f64().unwrap();
        count += summary["count"].as_u64().unwrap();
    }
    assert_eq!(amount, 1000.0);
    assert_eq!(count, 3);
}
