//! 认证授权模块
//!
//! 提供 JWT 认证、登录和请求身份：
//! - [`JwtService`] - JWT 令牌服务
//! - [`AuthService`] - 登录 (用户表 + 令牌签发)
//! - [`Identity`] - 当前请求身份
//! - [`require_admin`] - 管理员检查

pub mod identity;
pub mod jwt;
pub mod password;
pub mod service;
pub mod users;

pub use identity::{Identity, require_admin, resolve_identity};
pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use service::AuthService;
pub use users::UserStore;
