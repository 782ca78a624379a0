//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。所有选项都可通过 `STYLEFIX_*` 环境变量设置。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/fix.rs`

use clap::Parser;
use std::path::PathBuf;

/// stylefix - 按目录自动选择 phpcbf / php-cs-fixer 并批量执行
#[derive(Parser, Debug)]
#[command(name = "stylefix")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Discover phpcbf / php-cs-fixer configuration for each path and fix files in batches",
    long_about = None
)]
pub struct Cli {
    /// Files or directories to fix
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Print the resolved batches without running any tool
    #[arg(short = 'n', long, env = "STYLEFIX_DRY_RUN", default_value_t = false)]
    pub dry_run: bool,

    /// Number of threads used to resolve paths (0 = number of CPUs)
    #[arg(short, long, env = "STYLEFIX_JOBS", default_value_t = 0)]
    pub jobs: usize,

    /// Log every searched directory and resolved command
    #[arg(short, long, env = "STYLEFIX_VERBOSE", default_value_t = false)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_paths_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["stylefix"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from(".")]);
        assert!(!cli.dry_run);
        assert_eq!(cli.jobs, 0);
    }

    #[test]
    fn test_paths_and_flags() {
        let cli =
            Cli::try_parse_from(["stylefix", "-n", "-j", "4", "src", "tests/a.php"]).unwrap();
        assert_eq!(
            cli.paths,
            vec![PathBuf::from("src"), PathBuf::from("tests/a.php")]
        );
        assert!(cli.dry_run);
        assert_eq!(cli.jobs, 4);
    }
}
