//! 维护任务引擎 (模块原则：任务编排与工具调用分离)
//!
//! 对外部工具（git / poetry / pre-commit / pytest）的薄封装，
//! 任务间的前置依赖链与原模板保持一致：
//! lint、test 先执行 develop，develop 先检查必备依赖。

use crate::error::{MaintError, Result};
use crate::types::{Config, DependencyStatus, TestOptions};
use crate::utils::executor::CommandExecutor;

/// 开发环境必备工具
pub const ESSENTIALS: [&str; 3] = ["git", "python3", "poetry"];

/// 维护任务引擎
pub struct TaskRunner {
    config: Config,
}

impl TaskRunner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 探测全部必备工具
    ///
    /// 逐个运行 `<tool> --version`，无法启动或非零退出都记为缺失。
    /// 只生成报告，不中断：调用方决定缺失是否致命。
    pub fn check_dependencies(&self) -> Vec<DependencyStatus> {
        ESSENTIALS
            .iter()
            .map(|tool| {
                let version = CommandExecutor::probe_version(tool);
                DependencyStatus {
                    name: (*tool).to_string(),
                    found: version.is_some(),
                    version,
                }
            })
            .collect()
    }

    /// 搭建开发环境
    ///
    /// 前置：全部必备工具可用，否则返回 `DependencyMissing`。
    /// 步骤按序执行，任一步失败即中断：
    /// 1. git submodule update --init --checkout --recursive
    /// 2. poetry install
    /// 3. poetry run pre-commit install
    pub fn develop(&self) -> Result<()> {
        let missing: Vec<String> = self
            .check_dependencies()
            .into_iter()
            .filter(|dep| !dep.found)
            .map(|dep| dep.name)
            .collect();

        if !missing.is_empty() {
            return Err(MaintError::DependencyMissing(missing));
        }

        CommandExecutor::run_checked(
            "git",
            &["submodule", "update", "--init", "--checkout", "--recursive"],
        )?;
        if self.config.verbose {
            println!("✓ 子模块已更新");
        }

        CommandExecutor::run_checked("poetry", &["install"])?;
        if self.config.verbose {
            println!("✓ poetry 依赖已安装");
        }

        CommandExecutor::run_checked("poetry", &["run", "pre-commit", "install"])?;
        if self.config.verbose {
            println!("✓ pre-commit 钩子已安装");
        }

        Ok(())
    }

    /// 代码检查与格式化（前置任务：develop）
    pub fn lint(&self) -> Result<()> {
        self.develop()?;

        let args = lint_args(self.config.verbose);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        CommandExecutor::run_checked("poetry", &arg_refs)
    }

    /// 运行项目测试（前置任务：develop）
    pub fn test(&self, options: TestOptions) -> Result<()> {
        self.develop()?;

        let args = pytest_args(self.config.verbose, options);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        CommandExecutor::run_checked("poetry", &arg_refs)
    }
}

/// 构造 lint 的完整 poetry 参数列表
fn lint_args(verbose: bool) -> Vec<String> {
    let mut args = vec![
        "run".to_string(),
        "pre-commit".to_string(),
        "run".to_string(),
        "--show-diff-on-failure".to_string(),
        "--all-files".to_string(),
        "--color=always".to_string(),
    ];
    if verbose {
        args.push("--verbose".to_string());
    }
    args
}

/// 构造 test 的完整 poetry 参数列表
fn pytest_args(verbose: bool, options: TestOptions) -> Vec<String> {
    let mut args = vec![
        "run".to_string(),
        "pytest".to_string(),
        "--color=yes".to_string(),
    ];
    if verbose {
        args.push("-vv".to_string());
    }
    if options.skip_docker {
        args.push("--skip-docker-tests".to_string());
    }
    if options.sequential {
        // 仅运行标记为 sequential 的测试，禁用并行
        args.push("-m".to_string());
        args.push("sequential".to_string());
    } else {
        args.push("-n".to_string());
        args.push("auto".to_string());
        args.push("-m".to_string());
        args.push("not sequential".to_string());
    }
    args.push("tests".to_string());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dependencies_reports_all_essentials() {
        let runner = TaskRunner::new(Config::default());
        let report = runner.check_dependencies();

        assert_eq!(report.len(), ESSENTIALS.len());
        for (status, tool) in report.iter().zip(ESSENTIALS) {
            assert_eq!(status.name, tool);
            // found 与 version 必须一致
            assert_eq!(status.found, status.version.is_some());
        }
    }

    #[test]
    fn test_lint_args_default() {
        assert_eq!(
            lint_args(false),
            [
                "run",
                "pre-commit",
                "run",
                "--show-diff-on-failure",
                "--all-files",
                "--color=always",
            ]
        );
    }

    #[test]
    fn test_lint_args_verbose() {
        let args = lint_args(true);
        assert_eq!(args.last().map(String::as_str), Some("--verbose"));
    }

    #[test]
    fn test_pytest_args_default_is_parallel() {
        assert_eq!(
            pytest_args(false, TestOptions::default()),
            [
                "run",
                "pytest",
                "--color=yes",
                "-n",
                "auto",
                "-m",
                "not sequential",
                "tests",
            ]
        );
    }

    #[test]
    fn test_pytest_args_sequential() {
        let options = TestOptions {
            sequential: true,
            skip_docker: false,
        };
        assert_eq!(
            pytest_args(false, options),
            ["run", "pytest", "--color=yes", "-m", "sequential", "tests"]
        );
    }

    #[test]
    fn test_pytest_args_skip_docker_and_verbose() {
        let options = TestOptions {
            sequential: false,
            skip_docker: true,
        };
        let args = pytest_args(true, options);
        assert!(args.contains(&"-vv".to_string()));
        assert!(args.contains(&"--skip-docker-tests".to_string()));
        // "not sequential" 必须是单个参数，不能被 shell 拆分
        assert!(args.contains(&"not sequential".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("tests"));
    }
}
