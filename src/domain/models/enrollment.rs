// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// 座位容量默认值
///
/// 自习室共有80个编号座位，可通过配置覆盖
pub const DEFAULT_SEAT_CAPACITY: u32 = 80;

/// 报名记录实体
///
/// 表示一名学员在自习室的一段在册周期，包含联系方式、
/// 时段档位、起止日期、座位号和缴费信息。座位号为可选，
/// 未分配时为None。同一座位在日期区间重叠的两条记录上
/// 不允许重复持有（重叠不变量）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    /// 记录唯一标识符，创建时分配，不可变更
    pub id: Uuid,
    /// 学员姓名
    pub name: String,
    /// 联系电话
    pub phone_number: String,
    /// 时段档位，决定学员每天可使用的时长
    pub time_slot: TimeSlot,
    /// 在册开始日期
    pub start_date: NaiveDate,
    /// 在册结束日期，必须严格晚于开始日期
    pub end_date: NaiveDate,
    /// 座位号，范围[1, 容量]，None表示未分配
    pub seat_number: Option<u32>,
    /// 缴费金额，None表示未缴费；记录为0也视为已缴费
    pub payment_amount: Option<f64>,
    /// 电子邮箱（可选）
    pub email: Option<String>,
    /// 所在村庄（可选）
    pub village: Option<String>,
    /// 父亲姓名（可选）
    pub father_name: Option<String>,
    /// 创建时间戳
    pub created_at: DateTime<FixedOffset>,
    /// 最后更新时间戳
    pub updated_at: DateTime<FixedOffset>,
}

/// 时段档位枚举
///
/// 学员每天可使用自习室的时长档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimeSlot {
    /// 每天6小时
    #[default]
    #[serde(rename = "6hr")]
    SixHours,
    /// 每天12小时
    #[serde(rename = "12hr")]
    TwelveHours,
    /// 全天24小时
    #[serde(rename = "24hr")]
    TwentyFourHours,
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimeSlot::SixHours => write!(f, "6hr"),
            TimeSlot::TwelveHours => write!(f, "12hr"),
            TimeSlot::TwentyFourHours => write!(f, "24hr"),
        }
    }
}

impl FromStr for TimeSlot {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "6hr" => Ok(TimeSlot::SixHours),
            "12hr" => Ok(TimeSlot::TwelveHours),
            "24hr" => Ok(TimeSlot::TwentyFourHours),
            _ => Err(()),
        }
    }
}

/// 报名草稿
///
/// 创建报名记录所需的输入字段，经服务层校验后转为正式记录
#[derive(Debug, Clone)]
pub struct EnrollmentDraft {
    pub name: String,
    pub phone_number: String,
    pub time_slot: TimeSlot,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub seat_number: Option<u32>,
    pub payment_amount: Option<f64>,
    pub email: Option<String>,
    pub village: Option<String>,
    pub father_name: Option<String>,
}

/// 报名记录补丁
///
/// 部分更新用的字段集合，None表示对应字段保持不变。
/// 补丁无法将已分配的座位置空，退座走删除重建流程。
#[derive(Debug, Clone, Default)]
pub struct EnrollmentPatch {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub time_slot: Option<TimeSlot>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub seat_number: Option<u32>,
    pub payment_amount: Option<f64>,
    pub email: Option<String>,
    pub village: Option<String>,
    pub father_name: Option<String>,
}

impl EnrollmentPatch {
    /// 判断补丁是否为空
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone_number.is_none()
            && self.time_slot.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.seat_number.is_none()
            && self.payment_amount.is_none()
            && self.email.is_none()
            && self.village.is_none()
            && self.father_name.is_none()
    }
}

/// 领域错误类型
///
/// 表示在领域层可能发生的各种错误情况，包括字段校验失败、
/// 座位号越界和座位区间冲突。
#[derive(Error, Debug)]
pub enum DomainError {
    /// 校验错误，当输入数据不符合领域规则时发生
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// 座位号越界，座位号必须落在[1, 容量]区间内
    #[error("seat number {seat_number} is out of range (1-{capacity})")]
    SeatOutOfRange { seat_number: u32, capacity: u32 },

    /// 座位冲突，目标座位已被日期区间重叠的另一条记录持有
    #[error("seat {seat_number} is already held by an overlapping enrollment")]
    SeatConflict {
        seat_number: u32,
        conflicting_id: Uuid,
    },
}

/// 判断两个闭区间日期范围是否重叠
///
/// 采用闭-闭区间判定：`a1 <= b2 && b1 <= a2`
pub fn ranges_overlap(a1: NaiveDate, a2: NaiveDate, b1: NaiveDate, b2: NaiveDate) -> bool {
    a1 <= b2 && b1 <= a2
}

impl Enrollment {
    /// 由草稿创建一条新的报名记录
    ///
    /// 分配新的UUID并打上创建/更新时间戳。字段校验由服务层
    /// 在调用本方法之前完成。
    pub fn from_draft(draft: EnrollmentDraft) -> Self {
        let now: DateTime<FixedOffset> = Utc::now().into();
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            phone_number: draft.phone_number,
            time_slot: draft.time_slot,
            start_date: draft.start_date,
            end_date: draft.end_date,
            seat_number: draft.seat_number,
            payment_amount: draft.payment_amount,
            email: draft.email,
            village: draft.village,
            father_name: draft.father_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// 应用补丁，返回合并后的记录
    ///
    /// 补丁中为None的字段保持原值；`updated_at`刷新为当前时间
    pub fn apply_patch(&self, patch: &EnrollmentPatch) -> Self {
        let mut merged = self.clone();
        if let Some(ref name) = patch.name {
            merged.name = name.clone();
        }
        if let Some(ref phone) = patch.phone_number {
            merged.phone_number = phone.clone();
        }
        if let Some(slot) = patch.time_slot {
            merged.time_slot = slot;
        }
        if let Some(start) = patch.start_date {
            merged.start_date = start;
        }
        if let Some(end) = patch.end_date {
            merged.end_date = end;
        }
        if let Some(seat) = patch.seat_number {
            merged.seat_number = Some(seat);
        }
        if let Some(amount) = patch.payment_amount {
            merged.payment_amount = Some(amount);
        }
        if let Some(ref email) = patch.email {
            merged.email = Some(email.clone());
        }
        if let Some(ref village) = patch.village {
            merged.village = Some(village.clone());
        }
        if let Some(ref father) = patch.father_name {
            merged.father_name = Some(father.clone());
        }
        merged.updated_at = Utc::now().into();
        merged
    }

    /// 判断是否已缴费
    ///
    /// 以缴费金额字段是否存在为准，金额为0同样视为已缴费
    pub fn is_paid(&self) -> bool {
        self.payment_amount.is_some()
    }

    /// 在册周期跨越的天数
    pub fn days_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// 以给定日期计算剩余在册天数，过期后为0
    pub fn remaining_days(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days().max(0)
    }

    /// 判断在册周期是否覆盖给定日期（闭区间）
    pub fn active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// 判断在册周期是否与给定范围重叠
    ///
    /// `end`为None时按"自`start`起无界"处理，用于创建流程中
    /// 结束日期尚未确定时的可用座位查询
    pub fn overlaps_range(&self, start: NaiveDate, end: Option<NaiveDate>) -> bool {
        match end {
            Some(end) => ranges_overlap(self.start_date, self.end_date, start, end),
            None => start <= self.end_date,
        }
    }
}
