// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use enrollrs::config::settings::Settings;
use enrollrs::domain::services::enrollment_service::EnrollmentService;
use enrollrs::domain::services::reporting_service::ReportingService;
use enrollrs::domain::services::seat_service::SeatAllocator;
use enrollrs::infrastructure::repositories::in_memory_enrollment_repo::InMemoryEnrollmentRepository;
use enrollrs::presentation::middleware::auth_middleware::AuthState;
use enrollrs::presentation::routes;
use enrollrs::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting enrollrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Initialize repository and the shared write gate
    let repository = Arc::new(InMemoryEnrollmentRepository::new());
    let write_gate = Arc::new(Mutex::new(()));

    // 4. Initialize domain services
    let enrollment_service = Arc::new(EnrollmentService::new(
        repository.clone(),
        settings.seating.capacity,
        write_gate.clone(),
    ));
    let seat_allocator = Arc::new(SeatAllocator::new(
        repository.clone(),
        settings.seating.capacity,
        write_gate,
    ));
    let reporting_service = Arc::new(ReportingService::new(repository));
    info!(
        "Domain services initialized, seat capacity: {}",
        settings.seating.capacity
    );

    // 5. Setup auth state from configuration
    let auth_state = AuthState {
        api_token: settings.auth.api_token.clone(),
    };

    // 6. Start HTTP server
    let app = routes::build_router(
        enrollment_service,
        seat_allocator,
        reporting_service,
        auth_state,
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
