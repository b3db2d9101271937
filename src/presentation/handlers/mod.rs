// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 财务报表处理器
pub mod finance_handler;

/// 座位占用与分配处理器
pub mod seat_handler;

/// 学员增删改查处理器
pub mod student_handler;
