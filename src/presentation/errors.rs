// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::models::enrollment::DomainError;
use crate::domain::models::report::YearMonthParseError;
use crate::domain::repositories::enrollment_repository::RepositoryError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口。
/// 领域错误和仓库错误通过向下转型映射为对应的HTTP状态码，
/// 失败的操作不修改存储，客户端可据此决定是否重试。
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(domain_err) = self.0.downcast_ref::<DomainError>() {
            match domain_err {
                DomainError::Validation(_) => StatusCode::BAD_REQUEST,
                DomainError::SeatOutOfRange { .. } => StatusCode::BAD_REQUEST,
                DomainError::SeatConflict { .. } => StatusCode::CONFLICT,
            }
        } else if let Some(RepositoryError::NotFound) =
            self.0.downcast_ref::<RepositoryError>()
        {
            StatusCode::NOT_FOUND
        } else if self.0.downcast_ref::<YearMonthParseError>().is_some() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Unhandled application error: {:#}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
