//! 跨平台路径处理工具 (传统原则：常识性接口设计)

use crate::error::Result;
use std::path::Path;

/// 确保目录存在，包括父目录 (幂等操作)
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// 安全写入文件 (使用临时文件 + 原子替换)
pub fn write_file_safe(path: &Path, content: &str) -> Result<()> {
    // 确保父目录存在
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // 写入临时文件
    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, content)?;

    // 原子替换
    std::fs::rename(&temp_path, path)?;

    Ok(())
}
