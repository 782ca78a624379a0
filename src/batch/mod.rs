//! # 批量处理模块
//!
//! 将输入路径聚合为批次并逐个执行。
//!
//! ## 功能
//! - 并行解析输入路径，按输入顺序聚合
//! - 按 (配置参数, 可执行命令) 合并批次
//! - 串行执行批次，汇总退出码
//!
//! ## 依赖关系
//! - 被 `commands/fix.rs` 使用
//! - 使用 `rayon` 进行并行解析
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::BatchCollector;
pub use runner::BatchRunner;
