//! # 路径规范化
//!
//! 将用户输入路径转换为绝对路径（解析符号链接与 `.`/`..`），
//! 并确定向上搜索的起始目录。
//!
//! ## 依赖关系
//! - 被 `resolver/mod.rs` 调用

use crate::error::{Result, StyleFixError};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 规范化后的输入路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalInput {
    /// 规范化后的绝对路径
    pub path: PathBuf,
    /// 向上搜索的起始目录
    pub search_dir: PathBuf,
}

/// 规范化输入路径
///
/// 目录的起始目录是其自身，文件的起始目录是其父目录。
pub fn canonicalize_input(input: &Path) -> Result<CanonicalInput> {
    let path = fs::canonicalize(input).map_err(|e| StyleFixError::PathUnreadable {
        path: input.display().to_string(),
        source: e,
    })?;

    let search_dir = if path.is_dir() {
        path.clone()
    } else {
        match path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => path.clone(),
        }
    };

    Ok(CanonicalInput { path, search_dir })
}

/// 非 UTF-8 路径无法安全拼入命令行，按不可读处理
pub fn not_utf8(input: &Path) -> StyleFixError {
    StyleFixError::PathUnreadable {
        path: input.display().to_string(),
        source: io::Error::new(io::ErrorKind::InvalidData, "path is not valid UTF-8"),
    }
}
