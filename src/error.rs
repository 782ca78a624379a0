//! # 统一错误处理模块
//!
//! 定义 stylefix 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// stylefix 统一错误类型
#[derive(Error, Debug)]
pub enum StyleFixError {
    // ─────────────────────────────────────────────────────────────
    // 路径解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Cannot read: {path}, error: {source}")]
    PathUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot resolve parent of: {dir}, error: {source}")]
    WalkFailed {
        dir: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("Cannot run formatter/linter: '{program}' is not installed or not on PATH")]
    ToolNotFound { program: String },

    #[error("Failed to run '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, StyleFixError>;
