// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::enrollment::{EnrollmentDraft, EnrollmentPatch, TimeSlot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 创建学员请求数据传输对象
///
/// 字段名与前端表单保持一致（camelCase）
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    /// 学员姓名
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// 联系电话
    #[validate(length(min = 1, message = "phoneNumber cannot be empty"))]
    pub phone_number: String,
    /// 时段档位（6hr/12hr/24hr）
    pub time_slot: TimeSlot,
    /// 在册开始日期
    pub start_date: NaiveDate,
    /// 在册结束日期
    pub end_date: NaiveDate,
    /// 座位号（可选）
    pub seat_number: Option<u32>,
    /// 缴费金额（可选，出现即视为已缴费）
    pub payment_amount: Option<f64>,
    /// 电子邮箱（可选）
    pub email: Option<String>,
    /// 所在村庄（可选）
    pub village: Option<String>,
    /// 父亲姓名（可选）
    pub father_name: Option<String>,
}

impl From<CreateStudentDto> for EnrollmentDraft {
    fn from(dto: CreateStudentDto) -> Self {
        Self {
            name: dto.name,
            phone_number: dto.phone_number,
            time_slot: dto.time_slot,
            start_date: dto.start_date,
            end_date: dto.end_date,
            seat_number: dto.seat_number,
            payment_amount: dto.payment_amount,
            email: dto.email,
            village: dto.village,
            father_name: dto.father_name,
        }
    }
}

/// 更新学员请求数据传输对象
///
/// 所有字段可选，缺省字段保持不变
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
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

impl From<UpdateStudentDto> for EnrollmentPatch {
    fn from(dto: UpdateStudentDto) -> Self {
        Self {
            name: dto.name,
            phone_number: dto.phone_number,
            time_slot: dto.time_slot,
            start_date: dto.start_date,
            end_date: dto.end_date,
            seat_number: dto.seat_number,
            payment_amount: dto.payment_amount,
            email: dto.email,
            village: dto.village,
            father_name: dto.father_name,
        }
    }
}

/// 缴费状态过滤取值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatusFilter {
    /// 不过滤
    #[default]
    All,
    /// 仅已缴费
    Paid,
    /// 仅未缴费
    Unpaid,
}

impl PaymentStatusFilter {
    /// 转为查询参数用的可选布尔值
    pub fn as_paid_flag(self) -> Option<bool> {
        match self {
            PaymentStatusFilter::All => None,
            PaymentStatusFilter::Paid => Some(true),
            PaymentStatusFilter::Unpaid => Some(false),
        }
    }
}

/// 学员列表查询参数
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListStudentsQuery {
    /// 搜索词，匹配姓名/邮箱/电话/座位号/村庄
    pub search: Option<String>,
    /// 时段过滤
    pub time_slot: Option<TimeSlot>,
    /// 缴费状态过滤
    pub payment_status: Option<PaymentStatusFilter>,
    /// 分页大小
    pub limit: Option<u32>,
    /// 分页偏移
    pub offset: Option<u32>,
}
