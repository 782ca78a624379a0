//! # 解析结果数据模型
//!
//! 单个输入路径经过目录遍历与默认策略后得到的结果。
//!
//! ## 依赖关系
//! - 被 `resolver/` 构造
//! - 被 `models/batch.rs` 消费

/// 工具家族
///
/// `Checker` 对应 phpcs / phpcbf，`Fixer` 对应 php-cs-fixer。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolFamily {
    Checker,
    Fixer,
}

/// 配置参数（如 `--standard=...`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigArgs {
    pub family: ToolFamily,
    pub args: String,
}

impl ConfigArgs {
    pub fn new(family: ToolFamily, args: impl Into<String>) -> Self {
        Self {
            family,
            args: args.into(),
        }
    }
}

/// 可执行命令前缀（可含环境变量前缀和解释器）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableCommand {
    pub family: ToolFamily,
    pub command: String,
}

impl ExecutableCommand {
    pub fn new(family: ToolFamily, command: impl Into<String>) -> Self {
        Self {
            family,
            command: command.into(),
        }
    }
}

/// 单个输入路径的最终解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// 规范化后的绝对路径
    pub path: String,
    pub config: ConfigArgs,
    pub executable: ExecutableCommand,
}
