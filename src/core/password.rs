//! 安全密码生成器 (核心逻辑：约束满足的随机采样)
//!
//! 约束：密码必须同时包含小写字母、大写字母、数字、标点符号各至少一个。
//! 采用构造式采样：先从每个类别各取一个字符，剩余位置从完整字符集均匀采样，
//! 最后整体打乱。相比"整串重采样直到满足约束"的拒绝采样，
//! 该算法保证终止，对退化长度直接返回校验错误而不是死循环。

use crate::error::{MaintError, Result};
use crate::types::Alphabet;
use rand::Rng;
use rand::seq::SliceRandom;

/// 密码最小长度：四个字符类别各占一位
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// 默认密码长度
pub const DEFAULT_PASSWORD_LENGTH: usize = 64;

/// 安全密码生成器
///
/// 随机源使用 `rand::rng()`（CSPRNG），字母表由调用方显式传入。
pub struct PasswordGenerator {
    alphabet: Alphabet,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}

impl PasswordGenerator {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// 生成满足四类约束的随机密码
    ///
    /// # 参数
    /// - `length`: 密码长度，必须 >= [`MIN_PASSWORD_LENGTH`]
    ///
    /// # Errors
    /// - 长度不足以覆盖四个类别时返回 `PasswordTooShort`
    /// - 任一字符类别为空时返回 `EmptyCharClass`
    pub fn generate(&self, length: usize) -> Result<String> {
        if length < MIN_PASSWORD_LENGTH {
            return Err(MaintError::PasswordTooShort {
                length,
                min: MIN_PASSWORD_LENGTH,
            });
        }

        // 校验并收集各类别字符（后续采样不再失败）
        let mut class_sets: Vec<Vec<char>> = Vec::with_capacity(4);
        for (name, class) in self.alphabet.classes() {
            let chars: Vec<char> = class.chars().collect();
            if chars.is_empty() {
                return Err(MaintError::EmptyCharClass(name));
            }
            class_sets.push(chars);
        }

        let mut rng = rand::rng();
        let mut chars: Vec<char> = Vec::with_capacity(length);

        // 1. 每个类别保底一个字符
        for set in &class_sets {
            chars.push(set[rng.random_range(0..set.len())]);
        }

        // 2. 剩余位置从完整字符集均匀采样
        let full: Vec<char> = class_sets.concat();
        for _ in MIN_PASSWORD_LENGTH..length {
            chars.push(full[rng.random_range(0..full.len())]);
        }

        // 3. 整体打乱，消除"前四位固定类别顺序"的结构
        chars.shuffle(&mut rng);

        Ok(chars.into_iter().collect())
    }
}
