//! 请求身份
//!
//! 每个请求从 `Authorization: Bearer <token>` 解析出 [`Identity`]。
//! 没有头、格式不对或令牌无效时身份为 `None` (匿名)，不返回错误；
//! 真正的权限检查由 [`require_admin`] 在需要管理员的操作中执行。

use shared::{AppError, AppResult, Role};

use super::jwt::{Claims, JwtService};
use crate::security_log;

/// 当前用户身份 (从 JWT Claims 解析)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// 用户 ID
    pub id: String,
    /// 角色
    pub role: Role,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            role: claims.role,
        }
    }
}

impl Identity {
    /// 是否管理员
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// 从 Authorization 头解析身份
///
/// 解析失败一律视为匿名。无效令牌会记录安全日志。
pub fn resolve_identity(jwt: &JwtService, auth_header: Option<&str>) -> Option<Identity> {
    let token = JwtService::extract_from_header(auth_header?)?;

    match jwt.validate_token(token) {
        Ok(claims) => Some(Identity::from(claims)),
        Err(e) => {
            security_log!(WARN, "auth_failed", code = %e.code(), error = %e);
            None
        }
    }
}

/// 要求管理员身份
///
/// 匿名或非管理员返回 `Unauthorized`。
pub fn require_admin<'a>(identity: Option<&'a Identity>, operation: &str) -> AppResult<&'a Identity> {
    match identity {
        Some(user) if user.is_admin() => Ok(user),
        Some(user) => {
            security_log!(
                WARN,
                "admin_required",
                user_id = %user.id,
                user_role = %user.role,
                operation = operation
            );
            Err(AppError::unauthorized())
        }
        None => {
            security_log!(WARN, "auth_missing", operation = operation);
            Err(AppError::unauthorized())
        }
    }
}
