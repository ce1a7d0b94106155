//! CLI 参数定义

use crate::core::password::DEFAULT_PASSWORD_LENGTH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 默认环境文件输出目录
pub const DEFAULT_OUTPUT_DIR: &str = ".docker";

/// maintcli - 项目模板维护工具
#[derive(Parser)]
#[command(
    name = "maint",
    version = "0.1.0",
    about = "项目模板维护工具",
    long_about = "Odoo 项目模板的维护命令集：依赖检查、环境搭建、代码检查、测试、密码生成"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 检查开发环境必备依赖
    CheckDependencies {
        /// 输出格式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// 搭建开发环境（子模块、poetry 依赖、pre-commit 钩子）
    Develop,

    /// 代码检查与格式化
    Lint,

    /// 运行项目测试
    Test {
        /// 仅运行串行测试，禁用并行化
        #[arg(short, long)]
        sequential: bool,

        /// 跳过依赖 docker 的测试
        #[arg(long)]
        no_docker: bool,
    },

    /// 生成安全密码并写出环境文件
    GeneratePassword {
        /// 密码长度
        #[arg(short, long, default_value_t = DEFAULT_PASSWORD_LENGTH)]
        length: usize,

        /// 环境文件输出目录
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },
}

/// 解析输出格式参数
pub fn parse_format(format: &str) -> crate::error::Result<crate::types::OutputFormat> {
    use crate::types::OutputFormat;

    match format.to_lowercase().as_str() {
        "text" | "t" => Ok(OutputFormat::Text),
        "json" | "j" => Ok(OutputFormat::Json),
        other => Err(crate::error::MaintError::InvalidArgument(format!(
            "无效的输出格式: {} (支持 text/json)",
            other
        ))),
    }
}
