//! # 配置文件加载
//!
//! 读取原始配置。
//!
//! ## 功能
//! - 显式路径：经运行环境读取，读取或解析失败均为致命错误
//! - 未指定路径：直接使用空配置，不产生任何 I/O
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 通过 `environment/` 读取文件

use super::types::UnresolvedConfiguration;
use crate::environment::Environment;
use crate::error::{BatchfmtError, Result};

use std::path::Path;

/// 加载原始配置
pub fn resolve_config_file<E: Environment>(
    config_path: Option<&Path>,
    environment: &E,
) -> Result<UnresolvedConfiguration> {
    let Some(path) = config_path else {
        log::debug!("No configuration file given, using defaults");
        return Ok(UnresolvedConfiguration::new());
    };

    let text = environment
        .read_file(path)
        .map_err(|err| into_load_error(path, err))?;

    log::debug!("Loaded configuration from {}", path.display());
    parse_config_text(path, &text)
}

/// 解析配置文本：必须是 JSON 对象
fn parse_config_text(path: &Path, text: &str) -> Result<UnresolvedConfiguration> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| BatchfmtError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(BatchfmtError::ConfigParse {
            path: path.display().to_string(),
            reason: "expected a JSON object at the top level".to_string(),
        }),
    }
}

fn into_load_error(path: &Path, err: BatchfmtError) -> BatchfmtError {
    match err {
        BatchfmtError::FileRead { source, .. } => BatchfmtError::ConfigLoad {
            path: path.display().to_string(),
            source,
        },
        other => other,
    }
}
