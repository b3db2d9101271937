// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::enrollment::{
    DomainError, Enrollment, EnrollmentDraft, EnrollmentPatch,
};
use crate::domain::repositories::enrollment_repository::{
    EnrollmentQueryParams, EnrollmentRepository, RepositoryError,
};
use crate::domain::services::seat_service::{ensure_seat_in_range, find_seat_conflict};
use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// 报名服务
///
/// 报名记录的增删改查入口，负责字段校验并在涉及座位的
/// 写入路径上执行重叠不变量检查。所有变更操作通过共享
/// 写闸门串行化，失败的操作不会留下部分写入。
pub struct EnrollmentService<R: EnrollmentRepository> {
    repository: Arc<R>,
    seat_capacity: u32,
    write_gate: Arc<Mutex<()>>,
}

impl<R: EnrollmentRepository> EnrollmentService<R> {
    /// 创建新的报名服务实例
    pub fn new(repository: Arc<R>, seat_capacity: u32, write_gate: Arc<Mutex<()>>) -> Self {
        Self {
            repository,
            seat_capacity,
            write_gate,
        }
    }

    /// 创建一条报名记录
    ///
    /// 校验必填字段与日期先后顺序；若草稿携带座位号，
    /// 在写闸门内校验座位范围与重叠冲突后一并落库
    pub async fn create(&self, draft: EnrollmentDraft) -> Result<Enrollment> {
        validate_fields(
            &draft.name,
            &draft.phone_number,
            draft.start_date,
            draft.end_date,
            draft.payment_amount,
        )?;

        let _guard = self.write_gate.lock().await;

        if let Some(seat_number) = draft.seat_number {
            ensure_seat_in_range(seat_number, self.seat_capacity)?;
            if let Some(conflicting_id) = find_seat_conflict(
                self.repository.as_ref(),
                seat_number,
                draft.start_date,
                Some(draft.end_date),
                None,
            )
            .await?
            {
                return Err(DomainError::SeatConflict {
                    seat_number,
                    conflicting_id,
                }
                .into());
            }
        }

        let enrollment = Enrollment::from_draft(draft);
        let stored = self.repository.create(&enrollment).await?;
        tracing::info!("Enrollment {} created for '{}'", stored.id, stored.name);
        Ok(stored)
    }

    /// 根据ID获取一条报名记录
    pub async fn get(&self, id: Uuid) -> Result<Enrollment> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound.into())
    }

    /// 部分更新一条报名记录
    ///
    /// 补丁中缺省的字段保持不变；空补丁原样返回当前记录。
    /// 合并结果按创建时的规则重新校验，座位冲突检查排除
    /// 记录自身。
    pub async fn update(&self, id: Uuid, patch: EnrollmentPatch) -> Result<Enrollment> {
        let _guard = self.write_gate.lock().await;

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if patch.is_empty() {
            return Ok(existing);
        }

        let merged = existing.apply_patch(&patch);
        validate_fields(
            &merged.name,
            &merged.phone_number,
            merged.start_date,
            merged.end_date,
            merged.payment_amount,
        )?;

        // 日期或座位任一变化都可能产生新的冲突，统一重查
        if let Some(seat_number) = merged.seat_number {
            ensure_seat_in_range(seat_number, self.seat_capacity)?;
            if let Some(conflicting_id) = find_seat_conflict(
                self.repository.as_ref(),
                seat_number,
                merged.start_date,
                Some(merged.end_date),
                Some(id),
            )
            .await?
            {
                return Err(DomainError::SeatConflict {
                    seat_number,
                    conflicting_id,
                }
                .into());
            }
        }

        let updated = self.repository.update(&merged).await?;
        tracing::info!("Enrollment {} updated", id);
        Ok(updated)
    }

    /// 删除一条报名记录
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let _guard = self.write_gate.lock().await;
        self.repository.delete(id).await?;
        tracing::info!("Enrollment {} deleted", id);
        Ok(())
    }

    /// 按查询参数列出报名记录
    pub async fn list(&self, params: &EnrollmentQueryParams) -> Result<Vec<Enrollment>> {
        Ok(self.repository.list(params).await?)
    }
}

/// 校验创建/更新共用的字段规则
///
/// 收集所有失败项后一次性返回，便于前端整体展示
fn validate_fields(
    name: &str,
    phone_number: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    payment_amount: Option<f64>,
) -> Result<(), DomainError> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push("name cannot be empty".to_string());
    }
    if phone_number.trim().is_empty() {
        errors.push("phoneNumber cannot be empty".to_string());
    }
    if end_date <= start_date {
        errors.push("endDate must be strictly after startDate".to_string());
    }
    if let Some(amount) = payment_amount {
        if !amount.is_finite() || amount < 0.0 {
            errors.push("paymentAmount must be a non-negative number".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(errors))
    }
}

#[cfg(test)]
#[path = "enrollment_service_test.rs"]
mod tests;
