//! 外部工具执行器
//!
//! 两种执行方式：
//! - probe_version: 探测工具是否可用（输出被捕获，失败不报错）
//! - run_checked: 运行维护步骤（继承父进程 stdin/stdout/stderr，非零退出码视为错误）

use crate::error::{MaintError, Result};
use std::process::{Command, Stdio};

/// 外部工具执行器
pub struct CommandExecutor;

impl CommandExecutor {
    /// 探测工具：运行 `<tool> --version` 并捕获输出
    ///
    /// # 返回
    /// 工具可用时返回版本输出的第一行，否则返回 None
    /// （无法启动和非零退出码都视为不可用）
    pub fn probe_version(tool: &str) -> Option<String> {
        let output = Command::new(tool)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        // 有些工具把版本打到 stderr（如部分 python 版本）
        let text = if output.stdout.is_empty() {
            String::from_utf8_lossy(&output.stderr).to_string()
        } else {
            String::from_utf8_lossy(&output.stdout).to_string()
        };

        text.lines().next().map(|line| line.trim().to_string())
    }

    /// 运行维护步骤并等待完成
    ///
    /// # 参数
    /// - `program`: 程序名，如 `poetry`
    /// - `args`: 参数列表
    ///
    /// # 返回
    /// 退出码为 0 时返回 Ok(())，否则返回 CommandFailed
    pub fn run_checked(program: &str, args: &[&str]) -> Result<()> {
        let mut cmd = Command::new(program);
        cmd.args(args);

        // 继承标准流，让外部工具自己输出进度
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // 执行并等待
        let status = cmd.status().map_err(|e| {
            MaintError::CommandNotFound(format!(
                "{}: {} (请确保命令在 PATH 中或使用完整路径)",
                program, e
            ))
        })?;

        if !status.success() {
            return Err(MaintError::CommandFailed {
                program: program.to_string(),
                code: status.code().unwrap_or(-1),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_missing_tool_is_none() {
        let result = CommandExecutor::probe_version("definitely-not-a-real-tool-xyz");
        assert!(result.is_none());
    }

    #[test]
    fn test_run_checked_missing_tool_errors() {
        let result = CommandExecutor::run_checked("definitely-not-a-real-tool-xyz", &[]);
        assert!(matches!(result, Err(MaintError::CommandNotFound(_))));
    }
}
