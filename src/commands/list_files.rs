//! # list-files 模式
//!
//! 输出模式展开后的文件列表，不读写任何文件。
//! 配置仍会解析，诊断照常输出，保持各模式的配置校验一致。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用

use crate::cli::CommandLineOptions;
use crate::environment::Environment;
use crate::error::Result;

/// 执行 list-files
pub fn execute<E: Environment>(options: &CommandLineOptions, environment: &E) -> Result<()> {
    super::load_configuration(options, environment)?;

    let files = environment.glob(&options.file_patterns)?;
    log::debug!("Discovered {} file(s)", files.len());

    for file in &files {
        environment.log(&file.display().to_string());
    }

    Ok(())
}
