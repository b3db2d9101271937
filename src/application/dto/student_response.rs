// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::enrollment::{Enrollment, TimeSlot};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 学员响应数据传输对象
///
/// 在实体字段之外补充前端表格直接展示的派生字段：
/// 缴费状态、在册天数与剩余天数
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponseDto {
    pub id: Uuid,
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
    /// 是否已缴费（缴费金额字段存在即为已缴费）
    pub is_paid: bool,
    /// 在册周期天数
    pub days_count: i64,
    /// 以当天计算的剩余天数，过期后为0
    pub remaining_days: i64,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<Enrollment> for StudentResponseDto {
    fn from(enrollment: Enrollment) -> Self {
        let today = Utc::now().date_naive();
        Self {
            is_paid: enrollment.is_paid(),
            days_count: enrollment.days_count(),
            remaining_days: enrollment.remaining_days(today),
            id: enrollment.id,
            name: enrollment.name,
            phone_number: enrollment.phone_number,
            time_slot: enrollment.time_slot,
            start_date: enrollment.start_date,
            end_date: enrollment.end_date,
            seat_number: enrollment.seat_number,
            payment_amount: enrollment.payment_amount,
            email: enrollment.email,
            village: enrollment.village,
            father_name: enrollment.father_name,
            created_at: enrollment.created_at,
            updated_at: enrollment.updated_at,
        }
    }
}
