//! # stylefix - PHP 代码风格工具批量调度器
//!
//! 为每个输入路径向上查找 phpcs / php-cs-fixer 配置与 vendor 可执行文件，
//! 将解析结果相同的路径合并为一个批次，每个批次只调用一次外部工具。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (批次收集与执行)
//!   │     ├── resolver/  (路径解析与向上查找)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod resolver;
mod utils;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    utils::logging::init(cli.verbose);

    match commands::run(cli) {
        Ok(code) => exit_code(code),
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            ExitCode::from(1)
        }
    }
}

/// 超出 1..=255 的非零退出码统一映射为 1
fn exit_code(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(c) => ExitCode::from(c),
        Err(_) => ExitCode::from(1),
    }
}
