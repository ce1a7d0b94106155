//! 环境文件写出器 (简单原则：透明的文本格式)

use crate::error::Result;
use crate::utils::paths::write_file_safe;
use std::path::Path;

/// 环境文件写出器
///
/// 每个环境文件只包含一行 `KEY=value`，以换行符结尾，
/// 供下游部署工具（docker compose 的 env_file）直接消费。
pub struct EnvFileWriter;

impl EnvFileWriter {
    /// 序列化单个条目为 `KEY=value\n`
    #[must_use]
    pub fn serialize(key: &str, value: &str) -> String {
        format!("{}={}\n", key, value)
    }

    /// 写出环境文件（覆盖已有内容，不合并、不备份）
    pub fn write(path: &Path, key: &str, value: &str) -> Result<()> {
        write_file_safe(path, &Self::serialize(key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_single_line() {
        let line = EnvFileWriter::serialize("ADMIN_PASSWORD", "s3cret");
        assert_eq!(line, "ADMIN_PASSWORD=s3cret\n");
    }

    #[test]
    fn test_serialize_keeps_value_verbatim() {
        // 密码可能包含 = 和空格，值部分原样写出
        let line = EnvFileWriter::serialize("PGPASSWORD", "a=b c#d");
        assert_eq!(line, "PGPASSWORD=a=b c#d\n");
    }

    #[test]
    fn test_write_creates_exact_content() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("odoo.env");

        EnvFileWriter::write(&path, "ADMIN_PASSWORD", "abc123").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "ADMIN_PASSWORD=abc123\n");
    }

    #[test]
    fn test_write_overwrites_previous_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("db-access.env");

        EnvFileWriter::write(&path, "PGPASSWORD", "old").unwrap();
        EnvFileWriter::write(&path, "PGPASSWORD", "new").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "PGPASSWORD=new\n");
    }
}
