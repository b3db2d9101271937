// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json, Path},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::{
    application::dto::finance_response::MonthlyReportDto,
    domain::models::report::YearMonth,
    domain::repositories::enrollment_repository::EnrollmentRepository,
    domain::services::reporting_service::ReportingService,
    presentation::errors::AppError,
};

pub async fn monthly_report<R: EnrollmentRepository + 'static>(
    Extension(service): Extension<Arc<ReportingService<R>>>,
    Path(month): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let year_month: YearMonth = month.parse()?;
    let summary = service.monthly_summary(year_month).await?;
    Ok(Json(MonthlyReportDto::new(year_month.to_string(), summary)))
}

pub async fn totals<R: EnrollmentRepository + 'static>(
    Extension(service): Extension<Arc<ReportingService<R>>>,
) -> Result<impl IntoResponse, AppError> {
    let totals = service.totals().await?;
    Ok(Json(totals))
}
