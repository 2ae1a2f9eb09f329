//! # 统一错误处理模块
//!
//! 定义 batchfmt 的所有致命错误类型，使用 `thiserror` 派生。
//! 非致命的配置问题不在此处，见 `config::Diagnostic`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::io;
use thiserror::Error;

/// batchfmt 统一错误类型
#[derive(Error, Debug)]
pub enum BatchfmtError {
    // ─────────────────────────────────────────────────────────────
    // 配置加载错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to load configuration file: {path}")]
    ConfigLoad {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse configuration file: {path}\nReason: {reason}")]
    ConfigParse { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 文件发现错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to expand file pattern '{pattern}'\nReason: {reason}")]
    Discovery { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: String,
        #[source]
        source: io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 转换错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to format file: {path}\nReason: {reason}")]
    Transform { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 序列化错误
    // ─────────────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl BatchfmtError {
    /// 底层 I/O 错误类型（仅 I/O 类错误有值）
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            BatchfmtError::ConfigLoad { source, .. }
            | BatchfmtError::FileRead { source, .. }
            | BatchfmtError::FileWrite { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BatchfmtError>;
