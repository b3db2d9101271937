// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::enrollment_repository::EnrollmentRepository;
use crate::domain::services::enrollment_service::EnrollmentService;
use crate::domain::services::reporting_service::ReportingService;
use crate::domain::services::seat_service::SeatAllocator;
use crate::presentation::handlers::{finance_handler, seat_handler, student_handler};
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use axum::{
    routing::{delete, get, patch, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 公开路由仅含健康检查与版本信息；其余路由经认证中间件
/// 保护。三个领域服务通过Extension注入处理器。
///
/// # 返回值
///
/// 返回配置好的路由
pub fn build_router<R: EnrollmentRepository + 'static>(
    enrollment_service: Arc<EnrollmentService<R>>,
    seat_allocator: Arc<SeatAllocator<R>>,
    reporting_service: Arc<ReportingService<R>>,
    auth_state: AuthState,
) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let protected_routes = Router::new()
        .route("/v1/students", post(student_handler::create_student::<R>))
        .route("/v1/students", get(student_handler::list_students::<R>))
        .route("/v1/students/{id}", get(student_handler::get_student::<R>))
        .route(
            "/v1/students/{id}",
            patch(student_handler::update_student::<R>),
        )
        .route(
            "/v1/students/{id}",
            delete(student_handler::delete_student::<R>),
        )
        .route(
            "/v1/students/{id}/seat",
            post(seat_handler::assign_seat::<R>),
        )
        .route("/v1/seats/occupancy", get(seat_handler::occupancy::<R>))
        .route("/v1/seats/available", get(seat_handler::available_seats::<R>))
        .route(
            "/v1/finance/monthly/{month}",
            get(finance_handler::monthly_report::<R>),
        )
        .route("/v1/finance/totals", get(finance_handler::totals::<R>))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(enrollment_service))
        .layer(Extension(seat_allocator))
        .layer(Extension(reporting_service))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
