// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 包含核心业务实体和值对象
pub mod models;

/// 仓库接口模块
///
/// 定义数据访问的抽象接口
pub mod repositories;

/// 领域服务模块
///
/// 包含核心业务逻辑服务
pub mod services;
