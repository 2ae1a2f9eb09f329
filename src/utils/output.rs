//! # 美化输出工具
//!
//! 提供统一的终端输出样式。普通信息走 stdout，警告与错误走 stderr，
//! 便于脚本直接消费 `--output-file-paths` 的结果。
//!
//! ## 依赖关系
//! - 被 `environment/real.rs`、`main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印一行原样信息
pub fn print_line(msg: &str) {
    println!("{}", msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}
