//! Employee Directory Server - 员工目录 GraphQL 服务
//!
//! # 架构概述
//!
//! - **认证** (`auth`): 固定用户表 + Argon2 密码 + JWT 令牌
//! - **员工目录** (`directory`): 加锁的内存员工列表，排序与分页
//! - **GraphQL** (`graphql`): 查询与变更解析器
//! - **HTTP API** (`api`): axum 路由，`/graphql` 与 `/health`
//!
//! # 模块结构
//!
//! ```text
//! directory-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # JWT、密码、登录、请求身份
//! ├── directory/     # 员工存储
//! ├── graphql/       # Schema 与解析器
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod directory;
pub mod graphql;
pub mod utils;

// Re-export 公共类型
pub use auth::{AuthService, Identity, JwtService};
pub use core::{Config, Server, ServerState};
pub use directory::EmployeeStore;
pub use graphql::{DirectorySchema, build_schema};
pub use utils::init_logger;

/// 加载 `.env` 并初始化日志
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let json = std::env::var("LOG_JSON")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false);
    init_logger(&level, json)
}
