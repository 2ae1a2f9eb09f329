//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数，并决定本次调用的执行模式。
//!
//! ## 模式优先级（先匹配者生效）
//! 1. `--help`
//! 2. `--version`
//! 3. `--output-file-paths`
//! 4. `--output-resolved-config`
//! 5. 默认：格式化
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/`

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// batchfmt - 批量文本文件格式化工具
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "batchfmt")]
#[command(author = "Changjiang Wu")]
#[command(about = "Format text files in place, in parallel", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CommandLineOptions {
    /// Print help information
    #[arg(short = 'h', long = "help", default_value_t = false)]
    pub show_help: bool,

    /// Print version information
    #[arg(short = 'v', long = "version", default_value_t = false)]
    pub show_version: bool,

    /// Path to a JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List the files matched by the patterns instead of formatting them
    #[arg(long, default_value_t = false)]
    pub output_file_paths: bool,

    /// Print the resolved configuration instead of formatting
    #[arg(long, default_value_t = false)]
    pub output_resolved_config: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Glob patterns of files to format (prefix with '!' to exclude)
    #[arg(value_name = "FILE_PATTERNS")]
    pub file_patterns: Vec<String>,
}

/// 单次调用的执行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Help,
    Version,
    ListFiles,
    PrintConfig,
    Format,
}

impl CommandLineOptions {
    /// 按固定优先级选出唯一模式
    pub fn mode(&self) -> Mode {
        if self.show_help {
            Mode::Help
        } else if self.show_version {
            Mode::Version
        } else if self.output_file_paths {
            Mode::ListFiles
        } else if self.output_resolved_config {
            Mode::PrintConfig
        } else {
            Mode::Format
        }
    }
}

/// 渲染帮助文本
pub fn help_text() -> String {
    CommandLineOptions::command().render_help().to_string()
}

/// 版本字符串
pub fn version_text() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
