// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 财务报表响应DTO
pub mod finance_response;

/// 座位相关请求DTO
pub mod seat_request;

/// 学员请求DTO
pub mod student_request;

/// 学员响应DTO
pub mod student_response;
