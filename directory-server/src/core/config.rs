use crate::auth::JwtConfig;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时会先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 4000 | HTTP 服务端口 |
/// | SECRET_KEY | fallback_secret_key | JWT 签名密钥 |
/// | JWT_EXPIRATION_MINUTES | 60 | 令牌有效期(分钟) |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先，由 `setup_environment` 读取) |
/// | LOG_JSON | false | 是否输出 JSON 日志 (由 `setup_environment` 读取) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 SECRET_KEY=change-me cargo run -p directory-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            jwt: JwtConfig::from_env(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用固定密钥和端口，不读环境变量
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, secret: impl Into<String>) -> Self {
        Self {
            http_port,
            jwt: JwtConfig::with_secret(secret),
            environment: "test".into(),
        }
    }
}
