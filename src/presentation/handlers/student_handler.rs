// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json, Path, Query},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    application::dto::{
        student_request::{CreateStudentDto, ListStudentsQuery, UpdateStudentDto},
        student_response::StudentResponseDto,
    },
    domain::models::enrollment::DomainError,
    domain::repositories::enrollment_repository::{EnrollmentQueryParams, EnrollmentRepository},
    domain::services::enrollment_service::EnrollmentService,
    presentation::errors::AppError,
    presentation::middleware::auth_middleware::SessionContext,
};

/// 把DTO层的校验失败展平为领域校验错误的消息列表
fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect()
}

pub async fn create_student<R: EnrollmentRepository + 'static>(
    Extension(service): Extension<Arc<EnrollmentService<R>>>,
    Extension(session): Extension<SessionContext>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(errors) = payload.validate() {
        return Err(DomainError::Validation(validation_messages(&errors)).into());
    }

    let stored = service.create(payload.into()).await?;
    tracing::debug!(
        "Session {} created enrollment {}",
        session.session_id,
        stored.id
    );
    Ok((
        StatusCode::CREATED,
        Json(StudentResponseDto::from(stored)),
    ))
}

pub async fn list_students<R: EnrollmentRepository + 'static>(
    Extension(service): Extension<Arc<EnrollmentService<R>>>,
    Query(query): Query<ListStudentsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = EnrollmentQueryParams {
        search: query.search,
        time_slot: query.time_slot,
        paid: query.payment_status.unwrap_or_default().as_paid_flag(),
        limit: query.limit,
        offset: query.offset,
    };

    let students: Vec<StudentResponseDto> = service
        .list(&params)
        .await?
        .into_iter()
        .map(StudentResponseDto::from)
        .collect();
    Ok(Json(students))
}

pub async fn get_student<R: EnrollmentRepository + 'static>(
    Extension(service): Extension<Arc<EnrollmentService<R>>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let enrollment = service.get(id).await?;
    Ok(Json(StudentResponseDto::from(enrollment)))
}

pub async fn update_student<R: EnrollmentRepository + 'static>(
    Extension(service): Extension<Arc<EnrollmentService<R>>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let updated = service.update(id, payload.into()).await?;
    tracing::debug!("Session {} updated enrollment {}", session.session_id, id);
    Ok(Json(StudentResponseDto::from(updated)))
}

pub async fn delete_student<R: EnrollmentRepository + 'static>(
    Extension(service): Extension<Arc<EnrollmentService<R>>>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    service.delete(id).await?;
    tracing::debug!("Session {} deleted enrollment {}", session.session_id, id);
    Ok(StatusCode::NO_CONTENT)
}
