//! # 命令执行模块
//!
//! 实现命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `utils/`
//! - 子模块: fix

pub mod fix;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令，返回进程退出码
pub fn run(cli: Cli) -> Result<i32> {
    fix::execute(cli)
}
