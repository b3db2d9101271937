// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::report::{FinanceTotals, MonthlySummary, YearMonth};
use crate::domain::repositories::enrollment_repository::EnrollmentRepository;
use anyhow::Result;
use std::sync::Arc;

/// 财务汇总服务
///
/// 从报名记录推导月度与全量的营收/人数统计。两个操作都是
/// 只读投影，不需要写闸门，可与其他读操作并发执行。
///
/// 月度归属策略：报名记录按其开始日期所在月份计入，
/// 每条记录恰好归属一个月份，因此所有月度金额之和等于
/// 全量总额。
pub struct ReportingService<R: EnrollmentRepository> {
    repository: Arc<R>,
}

impl<R: EnrollmentRepository> ReportingService<R> {
    /// 创建新的财务汇总服务实例
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// 计算给定月份的缴费总额与报名人数
    ///
    /// 仅统计开始日期落在该月内的记录；未缴费记录计入
    /// 人数但金额按0计
    pub async fn monthly_summary(&self, year_month: YearMonth) -> Result<MonthlySummary> {
        let records = self.repository.find_all().await?;
        let mut summary = MonthlySummary::default();
        for enrollment in records
            .iter()
            .filter(|e| year_month.contains(e.start_date))
        {
            summary.amount += enrollment.payment_amount.unwrap_or(0.0);
            summary.count += 1;
        }
        Ok(summary)
    }

    /// 计算全量缴费总额与在册学员总数
    pub async fn totals(&self) -> Result<FinanceTotals> {
        let records = self.repository.find_all().await?;
        let mut totals = FinanceTotals::default();
        for enrollment in &records {
            totals.total_amount += enrollment.payment_amount.unwrap_or(0.0);
            totals.student_count += 1;
        }
        Ok(totals)
    }
}

#[cfg(test)]
#[path = "reporting_service_test.rs"]
mod tests;
