// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 认证中间件与会话上下文
pub mod auth_middleware;
