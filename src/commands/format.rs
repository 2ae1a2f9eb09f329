//! # format 模式（默认）
//!
//! 对展开后的每个文件独立执行 读取 -> 转换 -> 写回。
//!
//! ## 功能
//! - 配置只解析一次，所有任务只读共享
//! - 任务一次性提交到有界线程池，全部结束后再汇总
//! - 读取失败的文件不会转换或写回；任一失败使整批失败，但不取消其他任务
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `batch/` 并行执行

use crate::batch::BatchRunner;
use crate::cli::CommandLineOptions;
use crate::config::ResolvedConfiguration;
use crate::environment::Environment;
use crate::error::Result;

use std::path::Path;

/// 执行 format
pub fn execute<E, T>(options: &CommandLineOptions, environment: &E, transform: &T) -> Result<()>
where
    E: Environment,
    T: Fn(&Path, &str, &ResolvedConfiguration) -> Result<String> + Sync,
{
    let config = super::load_configuration(options, environment)?;
    let files = environment.glob(&options.file_patterns)?;

    let runner = BatchRunner::new(options.jobs);
    log::info!(
        "Formatting {} file(s) with {} job(s)",
        files.len(),
        runner.jobs()
    );

    let result = runner.run(&files, |path| {
        format_one(path, environment, transform, &config)
    })?;

    for (path, err) in &result.failures {
        log::debug!("{}: {}", path.display(), err);
    }
    if !result.failures.is_empty() {
        log::warn!(
            "{} of {} file(s) failed",
            result.failures.len(),
            result.total()
        );
    }

    let formatted = result.into_result()?;
    log::info!("Formatted {} file(s)", formatted);
    Ok(())
}

/// 单文件任务
fn format_one<E, T>(
    path: &Path,
    environment: &E,
    transform: &T,
    config: &ResolvedConfiguration,
) -> Result<()>
where
    E: Environment,
    T: Fn(&Path, &str, &ResolvedConfiguration) -> Result<String> + Sync,
{
    let text = environment.read_file(path)?;
    let formatted = transform(path, &text, config)?;
    environment.write_file(path, &formatted)?;
    log::debug!("Formatted {}", path.display());
    Ok(())
}
