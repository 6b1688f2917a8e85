//! 日志初始化
//!
//! 库内部只通过 `tracing` 宏输出事件；可执行程序（或测试、基准）在启动时
//! 调用 [`init_logging`] 安装订阅者。

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// 安装全局 fmt 订阅者
///
/// 优先读取 `RUST_LOG`，未设置时使用 `default_level`（如 `"info"`、`"tspwp=debug"`）。
/// 重复调用返回 [`Error::LoggingError`]，不会替换已安装的订阅者。
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|e| Error::LoggingError(format!("无效的日志级别 {default_level}: {e}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::LoggingError(e.to_string()))
}
