//! # 文件收集器
//!
//! 根据 glob 模式收集待处理文件列表。
//!
//! ## 功能
//! - 按给定顺序展开每个模式，模式内按 `glob` 的排序输出
//! - 跨模式去重，保留首次出现的位置
//! - `!` 前缀表示排除模式
//! - 只返回普通文件
//!
//! ## 依赖关系
//! - 被 `environment/real.rs` 调用
//! - 使用 `glob` 展开与匹配

use crate::error::{BatchfmtError, Result};
use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// `*` 不跨越路径分隔符；以 `.` 开头的文件与目录只有在模式中显式写出 `.` 时才匹配
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// 文件收集器
pub struct FileCollector {
    /// 包含模式（保持原顺序）
    includes: Vec<String>,
    /// 排除模式
    excludes: Vec<Pattern>,
}

impl FileCollector {
    /// 拆分包含/排除模式并校验排除模式
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut includes = Vec::new();
        let mut excludes = Vec::new();

        for pattern in patterns {
            match pattern.strip_prefix('!') {
                Some(negated) => {
                    let negated = negated.strip_prefix("./").unwrap_or(negated);
                    excludes.push(compile_pattern(negated)?);
                }
                None => includes.push(pattern.clone()),
            }
        }

        Ok(Self { includes, excludes })
    }

    /// 包含模式
    #[cfg(test)]
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// 检查路径是否被任一排除模式命中
    pub fn is_excluded(&self, path: &Path) -> bool {
        let normalized = path.strip_prefix(".").unwrap_or(path);
        self.excludes.iter().any(|pattern| {
            pattern.matches_path_with(path, MATCH_OPTIONS)
                || pattern.matches_path_with(normalized, MATCH_OPTIONS)
        })
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for pattern in &self.includes {
            let entries = glob::glob_with(pattern, MATCH_OPTIONS).map_err(|e| {
                BatchfmtError::Discovery {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                }
            })?;

            for entry in entries {
                let path = entry.map_err(|e| BatchfmtError::Discovery {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })?;

                if path.is_file() && !self.is_excluded(&path) && seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        }

        Ok(files)
    }
}

/// 编译单个模式
pub fn compile_pattern(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| BatchfmtError::Discovery {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}
