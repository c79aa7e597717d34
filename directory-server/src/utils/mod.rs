//! 工具模块 - 日志等通用工具
//!
//! - [`init_logger`] - tracing 初始化
//! - [`security_log!`](crate::security_log) - 安全事件日志宏

pub mod logger;

pub use logger::init_logger;
