//! # print-config 模式
//!
//! 以单行 JSON 输出解析后的配置，不展开模式、不读写文件。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `serde_json` 序列化

use crate::cli::CommandLineOptions;
use crate::environment::Environment;
use crate::error::Result;

/// 执行 print-config
pub fn execute<E: Environment>(options: &CommandLineOptions, environment: &E) -> Result<()> {
    let config = super::load_configuration(options, environment)?;
    environment.log(&serde_json::to_string(&config)?);
    Ok(())
}
