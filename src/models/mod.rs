//! # 数据模型模块
//!
//! 定义解析结果与批次结构。
//!
//! ## 依赖关系
//! - 被 `resolver/`, `batch/` 使用
//! - 子模块: target, batch

pub mod batch;
pub mod target;

pub use batch::{Batch, BatchList};
pub use target::{ConfigArgs, ExecutableCommand, ResolvedTarget, ToolFamily};
