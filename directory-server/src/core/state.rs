//! 服务器状态
//!
//! 在所有请求间共享，clone 开销只是几个 `Arc`。

use std::sync::Arc;

use crate::auth::{AuthService, JwtService, UserStore};
use crate::core::{Config, Result, ServerError};
use crate::directory::EmployeeStore;

#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub auth: Arc<AuthService>,
    pub employees: Arc<EmployeeStore>,
}

impl ServerState {
    /// 初始化：种子用户 (计算密码哈希) + 种子员工
    pub fn initialize(config: &Config) -> Result<Self> {
        let users = UserStore::seeded()
            .map_err(|e| ServerError::Init(format!("failed to hash seed passwords: {}", e)))?;
        let jwt = JwtService::with_config(config.jwt.clone());

        let employees = EmployeeStore::seeded();
        tracing::info!(
            users = users.len(),
            employees = employees.len(),
            "Directory initialized"
        );

        Ok(Self::with_parts(
            config.clone(),
            AuthService::new(users, jwt),
            employees,
        ))
    }

    pub fn with_parts(config: Config, auth: AuthService, employees: EmployeeStore) -> Self {
        Self {
            config,
            auth: Arc::new(auth),
            employees: Arc::new(employees),
        }
    }

    pub fn get_jwt_service(&self) -> &JwtService {
        self.auth.jwt()
    }
}
