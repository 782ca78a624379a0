//! # 解析模块
//!
//! 为每个输入路径确定要使用的工具与配置。
//!
//! ## 流程
//! 1. 规范化输入路径 (`path`)
//! 2. 从起始目录向上遍历 (`walker`)，逐级调用 `config` 与 `vendor`
//! 3. 对未找到的部分应用默认值 (`defaults`)
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 调用
//! - 子模块: path, config, vendor, walker, defaults

pub mod config;
pub mod defaults;
pub mod path;
pub mod vendor;
pub mod walker;

use crate::error::{Result, StyleFixError};
use crate::models::ResolvedTarget;
use walker::WalkOutcome;

use std::fs::File;
use std::path::Path;
use tracing::debug;

/// 单个输入路径的解析结果
#[derive(Debug)]
pub struct Resolution {
    pub target: ResolvedTarget,
    /// 向上遍历中途失败时的错误（已应用默认值）
    pub walk_error: Option<StyleFixError>,
}

/// 解析单个输入路径
///
/// 路径不存在、不可读或不是合法 UTF-8 时返回错误，调用方应跳过该路径。
pub fn resolve(input: &Path) -> Result<Resolution> {
    let canonical = path::canonicalize_input(input)?;
    let path = quote_path(&canonical.path).ok_or_else(|| path::not_utf8(input))?;
    let outcome = walker::walk_up(&canonical.search_dir);

    debug!(
        input = %input.display(),
        state = ?outcome.state,
        steps = outcome.steps,
        "walk finished"
    );

    Ok(finish(path, outcome))
}

/// 对遍历结果应用默认值
///
/// 遍历中途失败时保留已找到的部分，错误随结果返回。
fn finish(path: String, outcome: WalkOutcome) -> Resolution {
    let (config, executable) = defaults::apply_defaults(outcome.config, outcome.executable);

    debug!(
        path = %path,
        config = %config.args,
        executable = %executable.command,
        "resolved"
    );

    Resolution {
        target: ResolvedTarget {
            path,
            config,
            executable,
        },
        walk_error: outcome.error,
    }
}

/// 文件存在且可读
pub(crate) fn is_readable(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}

/// 按需为 shell 加引号，普通路径保持原样
///
/// 非 UTF-8 路径返回 `None`。
pub(crate) fn quote_path(path: &Path) -> Option<String> {
    path.to_str().map(|s| shell_words::quote(s).into_owned())
}
