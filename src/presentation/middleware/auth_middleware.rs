// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 认证状态
///
/// 持有校验请求所需的API令牌，由启动流程从配置注入
#[derive(Clone)]
pub struct AuthState {
    /// 有效的API访问令牌
    pub api_token: String,
}

/// 会话上下文
///
/// 认证通过后注入请求扩展，供处理器记录操作来源。
/// 生命周期由本服务持有，替代前端此前依赖的全局存储令牌。
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// 本次会话的标识符
    pub session_id: Uuid,
    /// 认证通过的时间点
    pub authenticated_at: DateTime<Utc>,
}

impl SessionContext {
    fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            authenticated_at: Utc::now(),
        }
    }
}

/// 认证中间件
///
/// 校验`Authorization: Bearer <token>`请求头并注入会话上下文
///
/// # 参数
///
/// * `state` - 认证状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 认证成功的响应
/// * `Err(StatusCode)` - 认证失败的状态码
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = {
        let auth_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        auth_header
            .strip_prefix("Bearer ")
            .ok_or(StatusCode::UNAUTHORIZED)?
            .to_string()
    };

    if token != state.api_token {
        tracing::warn!("Rejected request with invalid API token");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let session = SessionContext::new();
    tracing::debug!("Session {} authenticated", session.session_id);
    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}
