// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::enrollment::{Enrollment, TimeSlot};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 报名记录查询参数
///
/// 搜索词对姓名/邮箱/村庄做不区分大小写的子串匹配，
/// 对电话号码做子串匹配，对座位号做精确字符串匹配
#[derive(Debug, Default, Clone)]
pub struct EnrollmentQueryParams {
    pub search: Option<String>,
    pub time_slot: Option<TimeSlot>,
    pub paid: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl EnrollmentQueryParams {
    /// 判断一条记录是否命中查询条件（不含分页）
    pub fn matches(&self, enrollment: &Enrollment) -> bool {
        if let Some(ref term) = self.search {
            if !search_matches(enrollment, term) {
                return false;
            }
        }
        if let Some(slot) = self.time_slot {
            if enrollment.time_slot != slot {
                return false;
            }
        }
        if let Some(paid) = self.paid {
            if enrollment.is_paid() != paid {
                return false;
            }
        }
        true
    }
}

fn search_matches(enrollment: &Enrollment, term: &str) -> bool {
    let lowered = term.to_lowercase();
    if enrollment.name.to_lowercase().contains(&lowered) {
        return true;
    }
    if let Some(ref email) = enrollment.email {
        if email.to_lowercase().contains(&lowered) {
            return true;
        }
    }
    if enrollment.phone_number.contains(term) {
        return true;
    }
    if let Some(seat) = enrollment.seat_number {
        if seat.to_string() == term {
            return true;
        }
    }
    if let Some(ref village) = enrollment.village {
        if village.to_lowercase().contains(&lowered) {
            return true;
        }
    }
    false
}

/// 报名记录仓库特质
///
/// 定义报名记录的数据访问接口。仓库是记录的唯一持有者，
/// 其他组件不得绕过仓库直接修改记录。
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// 写入一条新记录
    async fn create(&self, enrollment: &Enrollment) -> Result<Enrollment, RepositoryError>;
    /// 根据ID查找记录
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Enrollment>, RepositoryError>;
    /// 整体覆盖更新一条记录
    async fn update(&self, enrollment: &Enrollment) -> Result<Enrollment, RepositoryError>;
    /// 删除一条记录
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 按查询参数列出记录，结果按创建时间排序
    async fn list(
        &self,
        params: &EnrollmentQueryParams,
    ) -> Result<Vec<Enrollment>, RepositoryError>;
    /// 列出持有给定座位号的所有记录
    async fn find_by_seat(&self, seat_number: u32) -> Result<Vec<Enrollment>, RepositoryError>;
    /// 列出全部记录
    async fn find_all(&self) -> Result<Vec<Enrollment>, RepositoryError>;
}
