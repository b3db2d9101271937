// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 内存报名记录仓库
pub mod in_memory_enrollment_repo;
