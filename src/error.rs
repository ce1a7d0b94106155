//! 错误处理模块 (修复原则：明确抛出异常)

use std::error::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaintError {
    #[error("文件IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("密码长度 {length} 过短，至少需要 {min} 个字符才能覆盖全部字符类别")]
    PasswordTooShort { length: usize, min: usize },

    #[error("字符类别 {0} 为空，无法生成密码")]
    EmptyCharClass(&'static str),

    #[error("缺少必备开发依赖: {}", .0.join(", "))]
    DependencyMissing(Vec<String>),

    #[error("命令未找到: {0}")]
    CommandNotFound(String),

    #[error("命令执行失败: {program} (退出码 {code})")]
    CommandFailed { program: String, code: i32 },

    #[error("无效参数: {0}")]
    InvalidArgument(String),
}

/// 详细的错误报告函数 (透明原则)
impl MaintError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息，安静模式
    pub fn report(&self, verbose: bool) {
        if verbose {
            // 详细模式：打印完整错误链
            eprintln!("❌ 错误: {}", self);

            // 如果有源错误，打印级联信息
            // (thiserror 支持自动的 source() 链)
            if let Some(source) = self.source() {
                eprintln!("  └─ 原因: {}", source);
                let mut current = source.source();
                while let Some(next) = current {
                    eprintln!("     └─ {}", next);
                    current = next.source();
                }
            }
        } else {
            // 安静模式：只打印关键信息
            match self {
                MaintError::Io(err) => eprintln!("文件错误: {}", err),
                MaintError::DependencyMissing(tools) => {
                    eprintln!("缺少必备依赖: {}", tools.join(", "))
                }
                MaintError::CommandNotFound(program) => eprintln!("命令未找到: {}", program),
                MaintError::CommandFailed { program, code } => {
                    eprintln!("命令失败: {} (退出码 {})", program, code)
                }
                _ => eprintln!("错误: {}", self),
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, MaintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short_message() {
        let err = MaintError::PasswordTooShort { length: 3, min: 4 };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_dependency_missing_lists_tools() {
        let err = MaintError::DependencyMissing(vec!["git".to_string(), "poetry".to_string()]);
        assert!(err.to_string().contains("git, poetry"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: MaintError = io.into();
        assert!(matches!(err, MaintError::Io(_)));
    }
}
