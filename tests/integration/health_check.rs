// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use enrollrs::domain::services::enrollment_service::EnrollmentService;
use enrollrs::domain::services::reporting_service::ReportingService;
use enrollrs::domain::services::seat_service::SeatAllocator;
use enrollrs::infrastructure::repositories::in_memory_enrollment_repo::InMemoryEnrollmentRepository;
use enrollrs::presentation::middleware::auth_middleware::AuthState;
use enrollrs::presentation::routes;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::util::ServiceExt;

fn app() -> axum::Router {
    let repository = Arc::new(InMemoryEnrollmentRepository::new());
    let write_gate = Arc::new(Mutex::new(()));
    routes::build_router(
        Arc::new(EnrollmentService::new(
            repository.clone(),
            80,
            write_gate.clone(),
        )),
        Arc::new(SeatAllocator::new(repository.clone(), 80, write_gate)),
        Arc::new(ReportingService::new(repository)),
        AuthState {
            api_token: "secret".to_string(),
        },
    )
}

/// 健康检查测试
///
/// 验证健康检查端点无需认证即可访问
#[tokio::test]
async fn health_check_works() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// 版本端点测试
#[tokio::test]
async fn version_endpoint_is_public() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/version")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// 未授权请求测试
///
/// 验证学员端点在没有认证时返回401状态码
#[tokio::test]
async fn students_endpoint_returns_401_without_auth() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/students")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// 错误令牌测试
#[tokio::test]
async fn students_endpoint_returns_401_with_wrong_token() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/v1/students")
                .header("Authorization", "Bearer wrong-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
