//! # 真实运行环境
//!
//! 基于终端与本地文件系统的 [`Environment`] 实现。
//!
//! ## 依赖关系
//! - 被 `main.rs` 构造
//! - 使用 `environment/discovery.rs` 展开模式
//! - 使用 `utils/output.rs` 输出

use super::{Environment, FileCollector};
use crate::error::{BatchfmtError, Result};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};

/// 终端 + 本地文件系统
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnvironment;

impl RealEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for RealEnvironment {
    fn log(&self, message: &str) {
        output::print_line(message);
    }

    fn warn(&self, message: &str) {
        output::print_warning(message);
    }

    fn glob(&self, patterns: &[String]) -> Result<Vec<PathBuf>> {
        FileCollector::new(patterns)?.collect()
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| BatchfmtError::FileRead {
            path: path.display().to_string(),
            source: e,
        })
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).map_err(|e| BatchfmtError::FileWrite {
            path: path.display().to_string(),
            source: e,
        })
    }
}
