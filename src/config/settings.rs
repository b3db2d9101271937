// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::enrollment::DEFAULT_SEAT_CAPACITY;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、认证和座位容量等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 认证配置
    pub auth: AuthSettings,
    /// 座位配置
    pub seating: SeatingSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 认证配置设置
#[derive(Debug, Deserialize)]
pub struct AuthSettings {
    /// API访问令牌，请求需携带`Authorization: Bearer <token>`
    pub api_token: String,
}

/// 座位配置设置
#[derive(Debug, Deserialize)]
pub struct SeatingSettings {
    /// 座位总数，座位号取值范围为[1, capacity]
    pub capacity: u32,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、可选配置文件和环境变量依次加载，
    /// 环境变量前缀为`ENROLLRS`，层级分隔符为`__`
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("auth.api_token", "change-me")?
            .set_default("seating.capacity", DEFAULT_SEAT_CAPACITY as i64)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("ENROLLRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
