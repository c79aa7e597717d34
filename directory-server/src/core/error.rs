use thiserror::Error;

/// 服务器启动/运行错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("绑定端口失败: {0}")]
    Bind(#[source] std::io::Error),

    #[error("HTTP 服务异常退出: {0}")]
    Serve(#[source] std::io::Error),

    #[error("初始化失败: {0}")]
    Init(String),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
