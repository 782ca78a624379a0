//! # 默认策略
//!
//! 目录遍历结束后，为仍未确定的可执行命令或配置参数提供默认值。
//! 两者各自独立判定，且都只参考另一方的最终值。
//!
//! ## 依赖关系
//! - 被 `resolver/mod.rs` 调用
//! - 使用 `models/target.rs`

use crate::models::{ConfigArgs, ExecutableCommand, ToolFamily};

/// PATH 上的 phpcbf
pub const DEFAULT_CHECKER_COMMAND: &str = "phpcbf";
/// PATH 上的 php-cs-fixer
pub const DEFAULT_FIXER_COMMAND: &str = "PHP_CS_FIXER_IGNORE_ENV=true php-cs-fixer fix";
/// phpcbf 内置规则集
pub const DEFAULT_CHECKER_ARGS: &str = "--standard=PSR12";
/// php-cs-fixer 内置规则集
pub const DEFAULT_FIXER_ARGS: &str = "--rules=@Symfony,@PSR12 --using-cache=no";

/// 补全可执行命令和配置参数
pub fn apply_defaults(
    config: Option<ConfigArgs>,
    executable: Option<ExecutableCommand>,
) -> (ConfigArgs, ExecutableCommand) {
    let executable = executable.unwrap_or_else(|| default_executable(config.as_ref()));
    let config = config.unwrap_or_else(|| default_config(&executable));
    (config, executable)
}

/// 配置属于 phpcs 家族时使用 phpcbf，否则使用 php-cs-fixer
pub fn default_executable(config: Option<&ConfigArgs>) -> ExecutableCommand {
    match config.map(|c| c.family) {
        Some(ToolFamily::Checker) => {
            ExecutableCommand::new(ToolFamily::Checker, DEFAULT_CHECKER_COMMAND)
        }
        _ => ExecutableCommand::new(ToolFamily::Fixer, DEFAULT_FIXER_COMMAND),
    }
}

/// 可执行命令属于 phpcbf 时使用 PSR12 标准，否则使用 php-cs-fixer 规则集
pub fn default_config(executable: &ExecutableCommand) -> ConfigArgs {
    match executable.family {
        ToolFamily::Checker => ConfigArgs::new(ToolFamily::Checker, DEFAULT_CHECKER_ARGS),
        ToolFamily::Fixer => ConfigArgs::new(ToolFamily::Fixer, DEFAULT_FIXER_ARGS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_found_falls_back_to_fixer() {
        let (config, exec) = apply_defaults(None, None);
        assert_eq!(exec.command, DEFAULT_FIXER_COMMAND);
        assert_eq!(config.args, DEFAULT_FIXER_ARGS);
    }

    #[test]
    fn test_checker_config_selects_phpcbf() {
        let found = ConfigArgs::new(ToolFamily::Checker, "--standard=/repo/phpcs.xml");
        let (config, exec) = apply_defaults(Some(found.clone()), None);

        assert_eq!(exec.command, "phpcbf");
        assert_eq!(config, found);
    }

    #[test]
    fn test_fixer_config_selects_fixer() {
        let found = ConfigArgs::new(
            ToolFamily::Fixer,
            "--using-cache=no --config=/repo/.php-cs-fixer.php",
        );
        let (_, exec) = apply_defaults(Some(found), None);

        assert_eq!(exec.command, DEFAULT_FIXER_COMMAND);
    }

    #[test]
    fn test_vendor_phpcbf_selects_psr12() {
        let vendor = ExecutableCommand::new(
            ToolFamily::Checker,
            "php -dmemory_limit=-1 /repo/vendor/bin/phpcbf",
        );
        let (config, exec) = apply_defaults(None, Some(vendor.clone()));

        assert_eq!(config.args, "--standard=PSR12");
        assert_eq!(exec, vendor);
    }

    #[test]
    fn test_family_not_fooled_by_path_text() {
        // 目录名包含 "phpcs" 的 fixer 配置仍然选择 php-cs-fixer
        let found = ConfigArgs::new(
            ToolFamily::Fixer,
            "--using-cache=no --config=/home/phpcs/.php-cs-fixer",
        );
        assert_eq!(
            default_executable(Some(&found)).command,
            DEFAULT_FIXER_COMMAND
        );
    }
}
