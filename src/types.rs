//! 核心数据结构定义 (表达原则：用数据结构表达逻辑)

use serde::{Deserialize, Serialize};

/// 默认小写字母类
pub const DEFAULT_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// 默认大写字母类
pub const DEFAULT_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// 默认数字类
pub const DEFAULT_DIGITS: &str = "0123456789";
/// 默认标点符号类（与 Python `string.punctuation` 一致，下游模板依赖该集合）
pub const DEFAULT_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// 配置选项 (支持详细/安静模式切换)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub verbose: bool, // 是否详细输出
}

/// 输出格式类型
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

/// 密码字母表：四个字符类别的显式配置
///
/// 不使用模块级全局常量，字母表作为参数传入生成器，
/// 便于测试和未来扩展（例如排除易混淆字符）。
#[derive(Debug, Clone)]
pub struct Alphabet {
    pub lowercase: String,
    pub uppercase: String,
    pub digits: String,
    pub punctuation: String,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            lowercase: DEFAULT_LOWERCASE.to_string(),
            uppercase: DEFAULT_UPPERCASE.to_string(),
            digits: DEFAULT_DIGITS.to_string(),
            punctuation: DEFAULT_PUNCTUATION.to_string(),
        }
    }
}

impl Alphabet {
    /// 按固定顺序返回四个字符类别：(名称, 字符集)
    pub fn classes(&self) -> [(&'static str, &str); 4] {
        [
            ("lowercase", self.lowercase.as_str()),
            ("uppercase", self.uppercase.as_str()),
            ("digits", self.digits.as_str()),
            ("punctuation", self.punctuation.as_str()),
        ]
    }

    /// 完整候选字符集（四类并集）
    pub fn full(&self) -> String {
        let mut all = String::with_capacity(
            self.lowercase.len() + self.uppercase.len() + self.digits.len() + self.punctuation.len(),
        );
        all.push_str(&self.lowercase);
        all.push_str(&self.uppercase);
        all.push_str(&self.digits);
        all.push_str(&self.punctuation);
        all
    }
}

/// 依赖探测结果条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyStatus {
    pub name: String,
    pub found: bool,
    /// 工具报告的版本行（探测失败时为 None）
    pub version: Option<String>,
}

/// test 任务选项
#[derive(Debug, Clone, Copy, Default)]
pub struct TestOptions {
    /// 仅运行串行测试（禁用并行化）
    pub sequential: bool,
    /// 跳过依赖 docker 的测试
    pub skip_docker: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabet_classes() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.lowercase.len(), 26);
        assert_eq!(alphabet.uppercase.len(), 26);
        assert_eq!(alphabet.digits.len(), 10);
        // Python string.punctuation 共 32 个符号
        assert_eq!(alphabet.punctuation.len(), 32);
    }

    #[test]
    fn test_full_alphabet_is_union() {
        let alphabet = Alphabet::default();
        let full = alphabet.full();
        assert_eq!(full.len(), 26 + 26 + 10 + 32);
        assert!(full.contains('a'));
        assert!(full.contains('Z'));
        assert!(full.contains('0'));
        assert!(full.contains('~'));
    }
}
