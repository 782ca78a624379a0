//! # 批次执行器
//!
//! 按创建顺序逐个执行批次，每个批次一次子进程调用。
//!
//! ## 功能
//! - 执行前检查工具是否已安装（绝对路径或 PATH 上）
//! - 构造 `<可执行命令> <配置参数> <文件列表>` 并交给 shell 执行
//! - 子进程继承 stdout/stderr
//! - 某个批次失败不影响后续批次
//! - 退出码取最后一个失败批次的退出码
//!
//! ## 依赖关系
//! - 被 `commands/fix.rs` 调用
//! - 使用 `models/batch.rs`, `utils/output.rs`

use crate::error::StyleFixError;
use crate::models::{Batch, BatchList};
use crate::utils::output;

use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// 单个批次执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// 退出码为 0
    Success,
    /// 非零退出码
    Failed(i32),
    /// 工具未安装，未执行
    ToolMissing(String),
    /// 无法启动子进程
    SpawnFailed(String),
}

impl BatchOutcome {
    /// 对应的退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            BatchOutcome::Success => 0,
            BatchOutcome::Failed(code) => *code,
            BatchOutcome::ToolMissing(_) | BatchOutcome::SpawnFailed(_) => 1,
        }
    }
}

/// 执行结果统计
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 执行的批次数
    pub total: usize,
    /// 失败的批次数
    pub failed: usize,
    /// 最后一个失败批次的退出码，全部成功时为 0
    pub exit_code: i32,
}

impl RunSummary {
    /// 记录批次结果，非零退出码覆盖之前的值
    pub fn record(&mut self, outcome: &BatchOutcome) {
        self.total += 1;
        let code = outcome.exit_code();
        if code != 0 {
            self.failed += 1;
            self.exit_code = code;
        }
    }
}

/// 批次执行器
pub struct BatchRunner {
    /// 用于执行命令行的 shell
    shell: String,
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new("sh")
    }
}

impl BatchRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    /// 构造批次的完整命令行
    pub fn command_line(batch: &Batch) -> String {
        format!(
            "{} {} {}",
            batch.executable,
            batch.config_args,
            batch.joined_files()
        )
    }

    /// 依次执行所有批次
    pub fn run(&self, batches: BatchList) -> RunSummary {
        let mut summary = RunSummary::default();

        // 每个批次执行完毕后即释放
        for batch in batches {
            let outcome = self.run_batch(&batch);
            if let BatchOutcome::ToolMissing(msg) | BatchOutcome::SpawnFailed(msg) = &outcome {
                output::print_error(msg);
            }
            summary.record(&outcome);
        }

        summary
    }

    /// 执行单个批次
    pub fn run_batch(&self, batch: &Batch) -> BatchOutcome {
        output::print_batch(&batch.executable, &batch.config_args, &batch.joined_files());

        if let Some(program) = program_of(&batch.executable) {
            if !is_available(&program) {
                warn!(program = %program, "tool not available");
                return BatchOutcome::ToolMissing(
                    StyleFixError::ToolNotFound { program }.to_string(),
                );
            }
        }

        let cmdline = Self::command_line(batch);
        debug!(shell = %self.shell, command = %cmdline, "spawning");

        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(&cmdline)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match status {
            Ok(status) if status.success() => BatchOutcome::Success,
            Ok(status) => {
                // 被信号终止时没有退出码
                let code = status.code().unwrap_or(1);
                warn!(code, command = %cmdline, "batch failed");
                BatchOutcome::Failed(code)
            }
            Err(e) => BatchOutcome::SpawnFailed(
                StyleFixError::SpawnFailed {
                    command: cmdline,
                    source: e,
                }
                .to_string(),
            ),
        }
    }
}

/// 命令前缀中实际执行的程序，跳过 `NAME=value` 环境变量前缀
pub fn program_of(executable: &str) -> Option<String> {
    shell_words::split(executable)
        .ok()?
        .into_iter()
        .find(|token| !is_env_assignment(token))
}

fn is_env_assignment(token: &str) -> bool {
    match token.split_once('=') {
        Some((name, _)) => {
            name.chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    }
}

/// 含路径分隔符时检查文件是否存在，否则在 PATH 上查找
fn is_available(program: &str) -> bool {
    if program.contains('/') {
        Path::new(program).exists()
    } else {
        which::which(program).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(entries: &[(&str, &str, &str)]) -> BatchList {
        let mut list = BatchList::new();
        for (file, config, exec) in entries {
            list.add(file.to_string(), config, exec);
        }
        list
    }

    #[test]
    fn test_command_line_layout() {
        let list = list_of(&[
            ("/r/a.php", "--standard=/r/phpcs.xml", "phpcbf"),
            ("/r/b.php", "--standard=/r/phpcs.xml", "phpcbf"),
        ]);
        let batch = list.iter().next().unwrap();

        assert_eq!(
            BatchRunner::command_line(batch),
            "phpcbf --standard=/r/phpcs.xml /r/a.php /r/b.php"
        );
    }

    #[test]
    fn test_all_success_exits_zero() {
        let list = list_of(&[("", "", "true"), ("", "#", "true")]);
        let summary = BatchRunner::default().run(list);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.exit_code, 0);
    }

    #[test]
    fn test_last_failure_wins() {
        let list = list_of(&[
            ("", "'exit 3'", "sh -c"),
            ("", "", "true"),
            ("", "'exit 5'", "sh -c"),
            ("", "#", "true"),
        ]);
        let summary = BatchRunner::default().run(list);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.exit_code, 5);
    }

    #[test]
    fn test_spawn_failure_counts_as_one() {
        let list = list_of(&[("", "", "true")]);
        let summary = BatchRunner::new("/nonexistent/shell").run(list);

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.exit_code, 1);
    }

    #[test]
    fn test_record_overwrites_not_accumulates() {
        let mut summary = RunSummary::default();
        summary.record(&BatchOutcome::Failed(2));
        summary.record(&BatchOutcome::Success);
        summary.record(&BatchOutcome::Failed(7));
        summary.record(&BatchOutcome::Success);

        assert_eq!(summary.exit_code, 7);
        assert_eq!(summary.failed, 2);
    }

    #[test]
    fn test_missing_tool_is_reported_and_later_batches_run() {
        let list = list_of(&[
            ("/r/a.php", "--standard=PSR12", "stylefix-no-such-tool"),
            ("", "'exit 4'", "sh -c"),
            ("", "", "true"),
        ]);
        let summary = BatchRunner::default().run(list);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.exit_code, 4);
    }

    #[test]
    fn test_missing_tool_outcome() {
        let list = list_of(&[(
            "/r/a.php",
            "--rules=@Symfony,@PSR12 --using-cache=no",
            "PHP_CS_FIXER_IGNORE_ENV=true stylefix-no-such-fixer fix",
        )]);
        let batch = list.iter().next().unwrap();

        match BatchRunner::default().run_batch(batch) {
            BatchOutcome::ToolMissing(msg) => assert_eq!(
                msg,
                "Cannot run formatter/linter: 'stylefix-no-such-fixer' is not installed or not on PATH"
            ),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_missing_vendored_script_path() {
        assert!(!is_available("/nonexistent/vendor/bin/phpcbf"));
        assert!(is_available("sh"));
    }

    #[test]
    fn test_program_of_skips_env_prefix() {
        assert_eq!(program_of("phpcbf").as_deref(), Some("phpcbf"));
        assert_eq!(
            program_of("PHP_CS_FIXER_IGNORE_ENV=true php-cs-fixer fix").as_deref(),
            Some("php-cs-fixer")
        );
        assert_eq!(
            program_of("php -dmemory_limit=-1 /repo/vendor/bin/phpcbf").as_deref(),
            Some("php")
        );
        assert_eq!(program_of(""), None);
    }
}
