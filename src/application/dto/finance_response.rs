// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::report::MonthlySummary;
use serde::{Deserialize, Serialize};

/// 月度财务报表响应数据传输对象
#[derive(Debug, Serialize, Deserialize)]
pub struct MonthlyReportDto {
    /// 归属月份，"YYYY-MM"格式
    pub month: String,
    /// 当月缴费总额
    pub amount: f64,
    /// 当月报名人数
    pub count: u64,
}

impl MonthlyReportDto {
    pub fn new(month: String, summary: MonthlySummary) -> Self {
        Self {
            month,
            amount: summary.amount,
            count: summary.count,
        }
    }
}
