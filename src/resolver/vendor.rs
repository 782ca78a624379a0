//! # 本地 vendor 可执行文件定位
//!
//! 检查 `<dir>/vendor/bin/` 下由 composer 安装的 phpcbf / php-cs-fixer。
//!
//! ## 依赖关系
//! - 被 `resolver/walker.rs` 调用
//! - 使用 `models/target.rs`

use super::{is_readable, quote_path};
use crate::models::{ExecutableCommand, ToolFamily};

use std::path::Path;

/// 在目录中查找 vendor 可执行文件，phpcbf 优先
pub fn locate_vendor(dir: &Path) -> Option<ExecutableCommand> {
    let bin = dir.join("vendor").join("bin");

    let phpcbf = bin.join("phpcbf");
    if is_readable(&phpcbf) {
        return Some(ExecutableCommand::new(
            ToolFamily::Checker,
            format!("php -dmemory_limit=-1 {}", quote_path(&phpcbf)?),
        ));
    }

    let fixer = bin.join("php-cs-fixer");
    if is_readable(&fixer) {
        return Some(ExecutableCommand::new(
            ToolFamily::Fixer,
            format!(
                "PHP_CS_FIXER_IGNORE_ENV=true php -dmemory_limit=-1 {} fix",
                quote_path(&fixer)?
            ),
        ));
    }

    None
}

/// 从 `start` 起沿祖先目录查找最近的 vendor 可执行文件
#[cfg(test)]
pub(crate) fn nearest_vendor(start: &Path) -> Option<ExecutableCommand> {
    start.ancestors().find_map(locate_vendor)
}
