//! # 配置数据模型
//!
//! ## 依赖关系
//! - 被 `config/resolver.rs`、`format/` 使用
//! - 使用 `serde` 序列化（print-config 模式）

use serde::Serialize;
use std::fmt;

/// 原始配置：保持文件中的键顺序
pub type UnresolvedConfiguration = serde_json::Map<String, serde_json::Value>;

/// 换行符类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NewLineKind {
    /// 沿用文件中第一个换行符
    #[default]
    Auto,
    Lf,
    Crlf,
    /// 当前平台的换行符
    System,
}

impl NewLineKind {
    pub const VALUES: [&'static str; 4] = ["auto", "lf", "crlf", "system"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(NewLineKind::Auto),
            "lf" => Some(NewLineKind::Lf),
            "crlf" => Some(NewLineKind::Crlf),
            "system" => Some(NewLineKind::System),
            _ => None,
        }
    }
}

impl fmt::Display for NewLineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewLineKind::Auto => write!(f, "auto"),
            NewLineKind::Lf => write!(f, "lf"),
            NewLineKind::Crlf => write!(f, "crlf"),
            NewLineKind::System => write!(f, "system"),
        }
    }
}

/// 已解析配置
///
/// 字段顺序即序列化顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfiguration {
    /// 每级缩进的空格数 (1..=16)
    pub indent_width: u8,
    /// 使用制表符缩进
    pub use_tabs: bool,
    pub new_line_kind: NewLineKind,
    pub trim_trailing_whitespace: bool,
    /// 保证文件以单个换行结尾
    pub ensure_final_newline: bool,
}

impl Default for ResolvedConfiguration {
    fn default() -> Self {
        Self {
            indent_width: 4,
            use_tabs: false,
            new_line_kind: NewLineKind::Auto,
            trim_trailing_whitespace: true,
            ensure_final_newline: true,
        }
    }
}

/// 非致命的配置问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 出问题的配置键
    pub property_name: String,
    pub message: String,
}

impl Diagnostic {
    /// 未知配置键
    pub fn unknown_property(key: &str) -> Self {
        Self {
            property_name: key.to_string(),
            message: format!("Unknown property in configuration: {}", key),
        }
    }

    /// 类型或范围不合法，已回退默认值
    pub fn invalid_value(
        key: &str,
        expected: &str,
        found: &serde_json::Value,
        default: impl fmt::Display,
    ) -> Self {
        Self {
            property_name: key.to_string(),
            message: format!(
                "Invalid value for '{}': expected {}, found {}. Using default of {}",
                key, expected, found, default
            ),
        }
    }
}

/// 配置解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigResolutionResult {
    pub config: ResolvedConfiguration,
    pub diagnostics: Vec<Diagnostic>,
}
