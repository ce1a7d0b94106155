//! 密码供给器 (模块原则：生成与落盘清晰分离)
//!
//! 流程：生成 → 校验约束 → 写文件。
//! 每次调用都生成全新密码，环境文件整体覆盖重写，不合并旧内容。

use crate::core::password::PasswordGenerator;
use crate::envfile::EnvFileWriter;
use crate::error::Result;
use crate::types::{Alphabet, Config};
use crate::utils::paths::ensure_dir;
use std::path::PathBuf;

/// Odoo 管理密码文件
pub const ODOO_ENV_FILE: &str = "odoo.env";
/// 数据库初始化密码文件
pub const DB_CREATION_ENV_FILE: &str = "db-creation.env";
/// 数据库访问密码文件
pub const DB_ACCESS_ENV_FILE: &str = "db-access.env";

/// 密码供给器
///
/// 生成 Odoo 管理密码和数据库密码，并写出三个环境文件：
/// - `odoo.env`:        `ADMIN_PASSWORD=<管理密码>`
/// - `db-creation.env`: `POSTGRES_PASSWORD=<数据库密码>`
/// - `db-access.env`:   `PGPASSWORD=<数据库密码>`
///
/// db-creation 与 db-access 共享同一个数据库密码是刻意设计：
/// 两个文件向不同消费方提供同一份 PostgreSQL 凭据，必须保持一致。
pub struct PasswordProvisioner {
    generator: PasswordGenerator,
    output_dir: PathBuf,
    config: Config,
}

impl PasswordProvisioner {
    pub fn new(output_dir: PathBuf, alphabet: Alphabet, config: Config) -> Self {
        Self {
            generator: PasswordGenerator::new(alphabet),
            output_dir,
            config,
        }
    }

    /// 生成密码并写出环境文件
    ///
    /// 先完成两次生成（含长度校验），再触碰文件系统；
    /// 校验失败时不产生任何文件。文件写入失败原样上抛，
    /// 已写出的文件不回滚。
    pub fn provision(&self, length: usize) -> Result<()> {
        // 两个独立密码：管理密码、数据库密码
        let admin_password = self.generator.generate(length)?;
        let db_password = self.generator.generate(length)?;

        ensure_dir(&self.output_dir)?;

        EnvFileWriter::write(
            &self.output_dir.join(ODOO_ENV_FILE),
            "ADMIN_PASSWORD",
            &admin_password,
        )?;
        if self.config.verbose {
            println!("✓ 已写出 {}", ODOO_ENV_FILE);
        }

        EnvFileWriter::write(
            &self.output_dir.join(DB_CREATION_ENV_FILE),
            "POSTGRES_PASSWORD",
            &db_password,
        )?;
        if self.config.verbose {
            println!("✓ 已写出 {}", DB_CREATION_ENV_FILE);
        }

        // 数据库密码原样复用，不重新生成
        EnvFileWriter::write(
            &self.output_dir.join(DB_ACCESS_ENV_FILE),
            "PGPASSWORD",
            &db_password,
        )?;
        if self.config.verbose {
            println!("✓ 已写出 {}", DB_ACCESS_ENV_FILE);
        }

        // 完成信息：只报告位置和长度，绝不打印密码本身
        println!("密码与环境文件已生成到 {}/", self.output_dir.display());
        println!("生成密码长度: {}", length);

        Ok(())
    }
}
