// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 座位分配请求数据传输对象
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignSeatDto {
    /// 目标座位号
    pub seat_number: u32,
}

/// 座位占用查询参数
#[derive(Debug, Deserialize)]
pub struct OccupancyQuery {
    /// 参考日期，缺省为当天
    pub date: Option<NaiveDate>,
}

/// 可用座位查询参数
///
/// 结束日期可缺省，此时按自开始日期起无界处理
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSeatsQuery {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}
