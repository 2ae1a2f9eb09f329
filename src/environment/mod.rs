//! # 运行环境模块
//!
//! 所有外部副作用（输出、文件发现、读写）都经由 [`Environment`] trait，
//! 编排逻辑本身不直接接触终端或文件系统，测试可替换为内存实现。
//!
//! ## 依赖关系
//! - 被 `commands/`、`config/loader.rs` 使用
//! - 子模块: discovery (glob 展开), real (真实文件系统实现)

pub mod discovery;
pub mod real;

pub use discovery::FileCollector;
pub use real::RealEnvironment;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// 外部副作用边界
///
/// 需要 `Sync`：单文件任务在工作线程池中并发调用。
pub trait Environment: Sync {
    /// 输出一行普通信息
    fn log(&self, message: &str);

    /// 输出一行警告（与 `log` 使用不同的流）
    fn warn(&self, message: &str);

    /// 将模式展开为文件列表，顺序对同一文件系统状态是确定的
    fn glob(&self, patterns: &[String]) -> Result<Vec<PathBuf>>;

    fn read_file(&self, path: &Path) -> Result<String>;

    fn write_file(&self, path: &Path, contents: &str) -> Result<()>;
}
