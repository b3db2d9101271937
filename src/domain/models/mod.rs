// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 报名记录实体及其相关类型
pub mod enrollment;

/// 财务汇总值对象
pub mod report;
