//! # 配置文件定位
//!
//! 在单个目录中按固定顺序检查 phpcs 与 php-cs-fixer 配置文件。
//! 只检查文件是否存在且可读，不解析其内容。
//!
//! ## 依赖关系
//! - 被 `resolver/walker.rs` 调用
//! - 使用 `models/target.rs`

use super::{is_readable, quote_path};
use crate::models::{ConfigArgs, ToolFamily};

use std::path::Path;

/// phpcs 配置文件（按优先级）
pub const CHECKER_CONFIG_FILES: &[&str] = &["phpcs.xml", "phpcs.xml.dist"];

/// php-cs-fixer 配置文件（按优先级）
pub const FIXER_CONFIG_FILES: &[&str] = &[
    ".php-cs-fixer",
    ".php-cs-fixer.php",
    ".php-cs-fixer.dist",
    ".php-cs-fixer.dist.php",
];

/// 在目录中查找配置文件
///
/// phpcs 家族优先；均未找到（或目录不是合法 UTF-8）时返回 `None`。
pub fn locate_config(dir: &Path) -> Option<ConfigArgs> {
    if let Some(file) = first_readable(dir, CHECKER_CONFIG_FILES) {
        let path = quote_path(&dir.join(file))?;
        return Some(ConfigArgs::new(
            ToolFamily::Checker,
            format!("--standard={}", path),
        ));
    }

    let file = first_readable(dir, FIXER_CONFIG_FILES)?;
    let path = quote_path(&dir.join(file))?;
    Some(ConfigArgs::new(
        ToolFamily::Fixer,
        format!("--using-cache=no --config={}", path),
    ))
}

fn first_readable(dir: &Path, candidates: &[&'static str]) -> Option<&'static str> {
    candidates
        .iter()
        .copied()
        .find(|name| is_readable(&dir.join(name)))
}
