// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::enrollment::{DomainError, Enrollment};
use crate::domain::repositories::enrollment_repository::{
    EnrollmentRepository, RepositoryError,
};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// 单个座位的占用视图
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeatOccupancy {
    /// 座位号
    pub seat_number: u32,
    /// 给定日期当天该座位是否被占用
    pub occupied: bool,
}

/// 校验座位号是否落在[1, 容量]区间内
pub fn ensure_seat_in_range(seat_number: u32, capacity: u32) -> Result<(), DomainError> {
    if seat_number < 1 || seat_number > capacity {
        return Err(DomainError::SeatOutOfRange {
            seat_number,
            capacity,
        });
    }
    Ok(())
}

/// 在给定座位的持有记录中查找与目标范围重叠的冲突记录
///
/// `end`为None时按自`start`起无界处理；`exclude`用于在更新
/// 场景下排除记录自身。返回首个冲突记录的ID。
pub async fn find_seat_conflict<R: EnrollmentRepository>(
    repository: &R,
    seat_number: u32,
    start: NaiveDate,
    end: Option<NaiveDate>,
    exclude: Option<Uuid>,
) -> Result<Option<Uuid>, RepositoryError> {
    let holders = repository.find_by_seat(seat_number).await?;
    Ok(holders
        .iter()
        .find(|e| Some(e.id) != exclude && e.overlaps_range(start, end))
        .map(|e| e.id))
}

/// 座位分配器
///
/// 基于仓库内容推导任意日期的座位占用视图，并在重叠不变量
/// 约束下完成座位分配。占用视图是仓库状态的确定性纯函数，
/// 不含任何随机成分。
pub struct SeatAllocator<R: EnrollmentRepository> {
    repository: Arc<R>,
    capacity: u32,
    write_gate: Arc<Mutex<()>>,
}

impl<R: EnrollmentRepository> SeatAllocator<R> {
    /// 创建新的座位分配器
    ///
    /// `write_gate`必须与同一仓库上的报名服务共享，
    /// 以保证查座-落座序列相对其他变更操作的原子性
    pub fn new(repository: Arc<R>, capacity: u32, write_gate: Arc<Mutex<()>>) -> Self {
        Self {
            repository,
            capacity,
            write_gate,
        }
    }

    /// 座位容量
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// 计算给定日期每个座位的占用情况
    ///
    /// 座位被占用当且仅当存在持有该座位号且在册周期覆盖
    /// 该日期的记录
    pub async fn occupancy(&self, on_date: NaiveDate) -> Result<Vec<SeatOccupancy>> {
        let records = self.repository.find_all().await?;
        let occupied: Vec<u32> = records
            .iter()
            .filter(|e| e.active_on(on_date))
            .filter_map(|e| e.seat_number)
            .collect();

        Ok((1..=self.capacity)
            .map(|seat_number| SeatOccupancy {
                seat_number,
                occupied: occupied.contains(&seat_number),
            })
            .collect())
    }

    /// 计算整个给定范围内无冲突的座位号集合
    ///
    /// 用于创建流程中的候选座位下拉；结束日期尚未确定时
    /// 传入None，按无界范围保守处理
    pub async fn available_seats(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<Vec<u32>> {
        let records = self.repository.find_all().await?;
        let blocked: Vec<u32> = records
            .iter()
            .filter(|e| e.overlaps_range(start, end))
            .filter_map(|e| e.seat_number)
            .collect();

        Ok((1..=self.capacity)
            .filter(|seat| !blocked.contains(seat))
            .collect())
    }

    /// 为既有记录分配座位
    ///
    /// 座位号越界返回`SeatOutOfRange`；目标座位被重叠记录
    /// 持有返回`SeatConflict`；记录不存在返回`NotFound`。
    /// 整个查座-落座序列持有写闸门。
    pub async fn assign_seat(&self, enrollment_id: Uuid, seat_number: u32) -> Result<Enrollment> {
        ensure_seat_in_range(seat_number, self.capacity)?;

        let _guard = self.write_gate.lock().await;

        let mut enrollment = self
            .repository
            .find_by_id(enrollment_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if let Some(conflicting_id) = find_seat_conflict(
            self.repository.as_ref(),
            seat_number,
            enrollment.start_date,
            Some(enrollment.end_date),
            Some(enrollment_id),
        )
        .await?
        {
            tracing::warn!(
                "Seat {} assignment rejected for enrollment {}: conflicts with {}",
                seat_number,
                enrollment_id,
                conflicting_id
            );
            return Err(DomainError::SeatConflict {
                seat_number,
                conflicting_id,
            }
            .into());
        }

        enrollment.seat_number = Some(seat_number);
        enrollment.updated_at = Utc::now().into();
        let updated = self.repository.update(&enrollment).await?;
        tracing::info!(
            "Seat {} assigned to enrollment {}",
            seat_number,
            enrollment_id
        );
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "seat_service_test.rs"]
mod tests;
