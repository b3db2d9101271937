// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 年月值对象
///
/// 表示财务汇总的归属月份，文本形式为"YYYY-MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

/// 年月解析错误
#[derive(Error, Debug)]
#[error("invalid year-month '{0}', expected YYYY-MM")]
pub struct YearMonthParseError(pub String);

impl YearMonth {
    /// 判断给定日期是否落在本月内
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || YearMonthParseError(s.to_string());
        let (year_str, month_str) = s.split_once('-').ok_or_else(err)?;
        if year_str.len() != 4 || month_str.len() != 2 {
            return Err(err());
        }
        let year: i32 = year_str.parse().map_err(|_| err())?;
        let month: u32 = month_str.parse().map_err(|_| err())?;
        if !(1..=12).contains(&month) {
            return Err(err());
        }
        Ok(Self { year, month })
    }
}

/// 月度财务汇总
///
/// 按开始日期归属到月份的缴费总额与报名人数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MonthlySummary {
    /// 当月缴费总额
    pub amount: f64,
    /// 当月报名人数
    pub count: u64,
}

/// 全量财务统计
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinanceTotals {
    /// 累计缴费总额
    pub total_amount: f64,
    /// 在册学员总数
    pub student_count: u64,
}
