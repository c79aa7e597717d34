//! 登录服务
//!
//! 校验用户名密码并签发令牌。

use shared::{AppError, AppResult, LoginResponse};

use super::jwt::JwtService;
use super::users::UserStore;
use crate::security_log;

/// 认证服务 - 用户表 + JWT
#[derive(Debug, Clone)]
pub struct AuthService {
    users: UserStore,
    jwt: JwtService,
}

impl AuthService {
    pub fn new(users: UserStore, jwt: JwtService) -> Self {
        Self { users, jwt }
    }

    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    /// 登录
    ///
    /// 用户不存在和密码错误返回同一个 `Invalid credentials` 错误。
    pub fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        let Some(user) = self.users.authenticate(username, password) else {
            security_log!(WARN, "login_failed", username = username);
            return Err(AppError::invalid_credentials());
        };

        let token = self.jwt.generate_token(&user.id, user.role).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            AppError::internal("Failed to sign token")
        })?;

        security_log!(
            INFO,
            "login_success",
            user_id = %user.id,
            username = %user.username
        );

        Ok(LoginResponse {
            id: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
            token,
        })
    }
}
