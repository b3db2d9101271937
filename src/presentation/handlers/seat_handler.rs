// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json, Path, Query},
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    application::dto::seat_request::{AssignSeatDto, AvailableSeatsQuery, OccupancyQuery},
    application::dto::student_response::StudentResponseDto,
    domain::repositories::enrollment_repository::EnrollmentRepository,
    domain::services::seat_service::SeatAllocator,
    presentation::errors::AppError,
    presentation::middleware::auth_middleware::SessionContext,
};

pub async fn occupancy<R: EnrollmentRepository + 'static>(
    Extension(allocator): Extension<Arc<SeatAllocator<R>>>,
    Query(query): Query<OccupancyQuery>,
) -> Result<impl IntoResponse, AppError> {
    let on_date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let seats = allocator.occupancy(on_date).await?;
    Ok(Json(json!({
        "date": on_date,
        "seats": seats,
    })))
}

pub async fn available_seats<R: EnrollmentRepository + 'static>(
    Extension(allocator): Extension<Arc<SeatAllocator<R>>>,
    Query(query): Query<AvailableSeatsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let seats = allocator
        .available_seats(query.start_date, query.end_date)
        .await?;
    Ok(Json(json!({ "availableSeats": seats })))
}

pub async fn assign_seat<R: EnrollmentRepository + 'static>(
    Extension(allocator): Extension<Arc<SeatAllocator<R>>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignSeatDto>,
) -> Result<impl IntoResponse, AppError> {
    let updated = allocator.assign_seat(id, payload.seat_number).await?;
    tracing::debug!(
        "Session {} assigned seat {} to enrollment {}",
        session.session_id,
        payload.seat_number,
        id
    );
    Ok(Json(StudentResponseDto::from(updated)))
}
