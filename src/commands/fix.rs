//! # fix 命令实现
//!
//! 解析全部输入路径，聚合为批次，然后逐个执行。
//!
//! ## 功能
//! - 并行解析输入路径
//! - `--dry-run` 时以表格形式打印批次计划
//! - 串行执行批次并汇总退出码
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `batch/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchCollector, BatchRunner};
use crate::cli::Cli;
use crate::error::Result;
use crate::models::BatchList;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 批次计划行
#[derive(Debug, Clone, Tabled)]
struct PlanRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Executable")]
    executable: String,
    #[tabled(rename = "Config")]
    config: String,
    #[tabled(rename = "Files")]
    files: usize,
}

/// 执行 fix 命令
pub fn execute(args: Cli) -> Result<i32> {
    let collected = BatchCollector::new(args.jobs).collect(&args.paths)?;

    if collected.batches.is_empty() {
        output::print_warning("No readable paths to fix.");
        return Ok(0);
    }

    if args.dry_run {
        print_plan(&collected.batches);
        return Ok(0);
    }

    let total = collected.batches.len();
    let summary = BatchRunner::default().run(collected.batches);

    if summary.failed == 0 {
        output::print_success(&format!(
            "{} batch(es) completed ({} path(s) skipped)",
            total, collected.skipped
        ));
    } else {
        output::print_warning(&format!(
            "{} of {} batch(es) failed, last exit code {} ({} path(s) skipped)",
            summary.failed, total, summary.exit_code, collected.skipped
        ));
    }

    Ok(summary.exit_code)
}

/// 打印批次计划
fn print_plan(batches: &BatchList) {
    output::print_header("Resolved Batches");

    let rows: Vec<PlanRow> = batches
        .iter()
        .enumerate()
        .map(|(i, b)| PlanRow {
            index: i + 1,
            executable: b.executable.clone(),
            config: b.config_args.clone(),
            files: b.files.len(),
        })
        .collect();
    println!("{}", Table::new(&rows));

    for (i, batch) in batches.iter().enumerate() {
        output::print_info(&format!(
            "#{}: {}",
            i + 1,
            BatchRunner::command_line(batch)
        ));
    }
}
