//! # 格式化模块
//!
//! 内置的转换函数：`(路径, 文件内容, 配置) -> 新内容`。
//! 编排层只要求一个纯函数，这里提供通用的文本规范化实现。
//!
//! ## 功能
//! - 按配置重排行首缩进（制表符或空格）
//! - 去除行尾空白
//! - 统一换行符
//! - 保证文件以单个换行结尾
//!
//! ## 依赖关系
//! - 被 `main.rs` 传入 `commands/format.rs`
//! - 使用 `config/types.rs`

use crate::config::{NewLineKind, ResolvedConfiguration};
use crate::error::{BatchfmtError, Result};
use std::path::Path;

/// 格式化单个文件的文本
pub fn format_file_text(path: &Path, text: &str, config: &ResolvedConfiguration) -> Result<String> {
    if text.contains('\0') {
        return Err(BatchfmtError::Transform {
            path: path.display().to_string(),
            reason: "file contains NUL bytes and looks binary".to_string(),
        });
    }

    let newline = resolve_newline(text, config.new_line_kind);
    let had_final_newline = text.ends_with('\n');

    let mut lines: Vec<String> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| normalize_line(line, config))
        .collect();

    // split 在末尾换行后会多出一个空串
    if had_final_newline {
        lines.pop();
    }

    if config.ensure_final_newline {
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return Ok(String::new());
        }
        let mut result = lines.join(newline);
        result.push_str(newline);
        Ok(result)
    } else {
        let mut result = lines.join(newline);
        if had_final_newline {
            result.push_str(newline);
        }
        Ok(result)
    }
}

/// 确定输出使用的换行符
fn resolve_newline(text: &str, kind: NewLineKind) -> &'static str {
    match kind {
        NewLineKind::Lf => "\n",
        NewLineKind::Crlf => "\r\n",
        NewLineKind::System => {
            if cfg!(windows) {
                "\r\n"
            } else {
                "\n"
            }
        }
        NewLineKind::Auto => match text.find('\n') {
            Some(index) if text[..index].ends_with('\r') => "\r\n",
            _ => "\n",
        },
    }
}

/// 处理单行：重排缩进、去除行尾空白
fn normalize_line(line: &str, config: &ResolvedConfiguration) -> String {
    let body_start = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    let (indent, body) = line.split_at(body_start);

    let body = if config.trim_trailing_whitespace {
        body.trim_end()
    } else {
        body
    };
    if body.is_empty() && config.trim_trailing_whitespace {
        return String::new();
    }

    let mut result = reindent(indent, config);
    result.push_str(body);
    result
}

/// 以列宽计算缩进，再按配置输出
///
/// 每个制表符固定计为 `indent_width` 列，不按制表位对齐（`"  \t"` 宽 6 列而非 4 列）。
fn reindent(indent: &str, config: &ResolvedConfiguration) -> String {
    let width = usize::from(config.indent_width.max(1));
    let columns: usize = indent
        .chars()
        .map(|c| if c == '\t' { width } else { 1 })
        .sum();

    if config.use_tabs {
        let mut result = "\t".repeat(columns / width);
        result.push_str(&" ".repeat(columns % width));
        result
    } else {
        " ".repeat(columns)
    }
}
