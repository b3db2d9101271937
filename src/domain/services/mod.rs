// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务：
/// - 报名服务（enrollment_service）：报名记录的增删改查与字段校验
/// - 座位服务（seat_service）：座位占用推导与重叠不变量下的座位分配
/// - 财务服务（reporting_service）：月度与全量的营收/人数汇总
pub mod enrollment_service;
pub mod reporting_service;
pub mod seat_service;
