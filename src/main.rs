//! maintcli 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给各模块
//! - 安静模式：默认输出克制，--verbose 切换详细进度
//! - 错误处理：统一经 MaintError::report 上报，失败退出码为 1

mod cli;
mod core;
mod envfile;
mod error;
mod types;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use error::Result;
use types::{Alphabet, Config, DependencyStatus, OutputFormat, TestOptions};

use crate::core::provision::PasswordProvisioner;
use crate::core::tasks::TaskRunner;

fn main() {
    // 解析 CLI 参数
    let cli = Cli::parse();

    let config = Config {
        verbose: cli.verbose,
    };
    let verbose = config.verbose;

    // 执行命令，统一错误处理
    match run_command(cli.command, config) {
        Ok(_) => {
            // 静默成功 - 各命令已经有自己的输出，这里不重复
        }
        Err(e) => {
            e.report(verbose);
            std::process::exit(1);
        }
    }
}

/// 运行具体命令
fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        // 依赖检查：只报告，不中断
        Commands::CheckDependencies { format } => {
            let output_format = cli::parse_format(&format)?;
            let report = TaskRunner::new(config.clone()).check_dependencies();
            print_dependency_report(&report, &output_format, config.verbose)?;
        }

        // 环境搭建
        Commands::Develop => {
            TaskRunner::new(config).develop()?;
            println!("✅ 开发环境已就绪");
        }

        // 代码检查
        Commands::Lint => TaskRunner::new(config).lint()?,

        // 测试
        Commands::Test {
            sequential,
            no_docker,
        } => {
            let options = TestOptions {
                sequential,
                skip_docker: no_docker,
            };
            TaskRunner::new(config).test(options)?;
        }

        // 密码生成与环境文件写出
        Commands::GeneratePassword { length, output_dir } => {
            let provisioner = PasswordProvisioner::new(output_dir, Alphabet::default(), config);
            provisioner.provision(length)?;
        }
    }

    Ok(())
}

/// 打印依赖探测报告
fn print_dependency_report(
    report: &[DependencyStatus],
    format: &OutputFormat,
    verbose: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for dep in report {
                if dep.found {
                    if verbose {
                        match &dep.version {
                            Some(version) => println!("✓ {} ({})", dep.name, version),
                            None => println!("✓ {}", dep.name),
                        }
                    } else {
                        println!("✓ {}", dep.name);
                    }
                } else {
                    println!("❌ {}", dep.name);
                }
            }

            let missing: Vec<&str> = report
                .iter()
                .filter(|dep| !dep.found)
                .map(|dep| dep.name.as_str())
                .collect();

            if missing.is_empty() {
                println!("✅ 全部必备依赖可用");
            } else {
                println!("⚠️  缺少必备开发依赖: {}", missing.join(", "));
            }
        }
    }

    Ok(())
}
