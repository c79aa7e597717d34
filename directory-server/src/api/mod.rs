//! HTTP 路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | `/graphql` | POST | 执行 GraphQL |
//! | `/graphql`, `/` | GET | Sandbox 页面 |
//! | `/health` | GET | 健康检查 |
//!
//! CORS 对所有来源开放。

mod handler;
mod health;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::graphql::{DirectorySchema, build_schema};

/// 路由共享上下文
#[derive(Clone)]
pub struct AppContext {
    pub state: ServerState,
    pub schema: DirectorySchema,
}

impl AppContext {
    pub fn new(state: ServerState) -> Self {
        let schema = build_schema(state.clone());
        Self { state, schema }
    }
}

/// 构建完整路由
pub fn router(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/graphql", get(handler::sandbox).post(handler::execute))
        .route("/", get(handler::sandbox))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppContext::new(state))
}
