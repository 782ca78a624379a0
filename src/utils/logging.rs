//! # 日志初始化
//!
//! 安装 `tracing-subscriber` 的 fmt 订阅者，输出到 stderr。
//! `--verbose` 时级别为 debug，否则读取 `RUST_LOG`（默认 warn）。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用

use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // 重复初始化（如测试中）时忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
