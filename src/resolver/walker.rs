//! # 向上目录遍历
//!
//! 从起始目录逐级向上，同时查找配置文件与 vendor 可执行文件，
//! 两者都找到即停止；到达文件系统根目录时无论结果如何都停止。
//!
//! ## 依赖关系
//! - 被 `resolver/mod.rs` 调用
//! - 使用 `resolver/config.rs`, `resolver/vendor.rs`

use super::config::locate_config;
use super::vendor::locate_vendor;
use crate::error::StyleFixError;
use crate::models::{ConfigArgs, ExecutableCommand};

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 遍历终止状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    /// 仍在向上搜索
    Searching,
    /// 配置与可执行文件均已找到
    Resolved,
    /// 已检查文件系统根目录
    AtRoot,
}

/// 一次遍历的结果
#[derive(Debug)]
pub struct WalkOutcome {
    pub config: Option<ConfigArgs>,
    pub executable: Option<ExecutableCommand>,
    pub state: WalkState,
    /// 已检查的目录数
    pub steps: usize,
    /// 计算父目录失败时的错误，此时遍历提前结束
    pub error: Option<StyleFixError>,
}

impl WalkOutcome {
    fn new() -> Self {
        Self {
            config: None,
            executable: None,
            state: WalkState::Searching,
            steps: 0,
            error: None,
        }
    }

    fn is_resolved(&self) -> bool {
        self.config.is_some() && self.executable.is_some()
    }
}

/// 从 `start` 向上遍历
///
/// `start` 应为规范化后的绝对目录。
pub fn walk_up(start: &Path) -> WalkOutcome {
    walk_up_with(start, parent_of)
}

/// 使用指定的父目录计算函数向上遍历
pub(crate) fn walk_up_with<F>(start: &Path, parent_of: F) -> WalkOutcome
where
    F: Fn(&Path) -> Result<PathBuf, StyleFixError>,
{
    let mut outcome = WalkOutcome::new();
    let mut dir = start.to_path_buf();

    loop {
        outcome.steps += 1;

        if outcome.config.is_none() {
            outcome.config = locate_config(&dir);
        }
        if outcome.executable.is_none() {
            outcome.executable = locate_vendor(&dir);
        }

        debug!(
            dir = %dir.display(),
            config = outcome.config.is_some(),
            executable = outcome.executable.is_some(),
            "searched directory"
        );

        if outcome.is_resolved() {
            outcome.state = WalkState::Resolved;
            break;
        }

        let parent = match parent_of(&dir) {
            Ok(parent) => parent,
            Err(e) => {
                outcome.error = Some(e);
                break;
            }
        };

        if parent == dir {
            outcome.state = WalkState::AtRoot;
            break;
        }
        dir = parent;
    }

    outcome
}

/// 规范化 `<dir>/..`
fn parent_of(dir: &Path) -> Result<PathBuf, StyleFixError> {
    fs::canonicalize(dir.join("..")).map_err(|e| StyleFixError::WalkFailed {
        dir: dir.display().to_string(),
        source: e,
    })
}
