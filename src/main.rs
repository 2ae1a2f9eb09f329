//! # batchfmt - 批量文本文件格式化工具
//!
//! 解析配置、按 glob 模式收集文件，并在线程池中并行地
//! 读取 -> 格式化 -> 写回每个文件。
//!
//! ## 执行模式
//! - `--help` / `--version`
//! - `--output-file-paths` - 只列出匹配的文件
//! - `--output-resolved-config` - 只输出解析后的配置
//! - 默认 - 原地格式化
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/          (命令行参数与模式选择)
//!   ├── commands/     (模式分派与处理流水线)
//!   │     ├── config/      (配置加载与解析)
//!   │     ├── batch/       (有界并行执行)
//!   │     └── format/      (内置转换函数)
//!   ├── environment/  (副作用边界：输出、发现、读写)
//!   ├── utils/        (工具函数)
//!   └── error.rs      (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod environment;
mod error;
mod format;
#[cfg(test)]
mod test_support;
mod utils;

use clap::Parser;
use cli::CommandLineOptions;
use environment::RealEnvironment;
use std::error::Error;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = CommandLineOptions::parse();
    let environment = RealEnvironment::new();

    if let Err(e) = commands::run_cli(&options, &environment, &format::format_file_text) {
        if let Some(kind) = e.io_kind() {
            log::debug!("I/O failure kind: {:?}", kind);
        }
        utils::output::print_error(&error_chain(&e));
        std::process::exit(1);
    }
}

/// 拼接错误及其底层原因
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!("\nCaused by: {}", cause));
        source = cause.source();
    }
    message
}
