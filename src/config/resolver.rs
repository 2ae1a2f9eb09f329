//! # 配置解析器
//!
//! 将原始 JSON 配置折叠为 `ResolvedConfiguration` 与诊断列表。
//!
//! ## 功能
//! - 纯函数，无 I/O
//! - 永不失败：未知键、非法值各产生一条诊断，对应字段保留默认值
//! - 诊断顺序与原始配置中的键顺序一致
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `config/types.rs`

use super::types::{
    ConfigResolutionResult, Diagnostic, NewLineKind, ResolvedConfiguration,
    UnresolvedConfiguration,
};
use serde_json::Value;

/// 缩进宽度允许范围
const INDENT_WIDTH_RANGE: std::ops::RangeInclusive<u64> = 1..=16;

/// 解析原始配置
pub fn resolve_configuration(raw: UnresolvedConfiguration) -> ConfigResolutionResult {
    raw.into_iter()
        .fold(ConfigResolutionResult::default(), |mut result, (key, value)| {
            if let Err(diagnostic) = apply_property(&mut result.config, &key, &value) {
                result.diagnostics.push(diagnostic);
            }
            result
        })
}

/// 应用单个配置项；失败时字段保持默认值
fn apply_property(
    config: &mut ResolvedConfiguration,
    key: &str,
    value: &Value,
) -> Result<(), Diagnostic> {
    let defaults = ResolvedConfiguration::default();

    match key {
        "indentWidth" => {
            config.indent_width = value
                .as_u64()
                .filter(|width| INDENT_WIDTH_RANGE.contains(width))
                .and_then(|width| u8::try_from(width).ok())
                .ok_or_else(|| {
                    Diagnostic::invalid_value(
                        key,
                        "an integer between 1 and 16",
                        value,
                        defaults.indent_width,
                    )
                })?;
        }
        "useTabs" => config.use_tabs = parse_bool(key, value, defaults.use_tabs)?,
        "newLineKind" => {
            config.new_line_kind = value
                .as_str()
                .and_then(NewLineKind::parse)
                .ok_or_else(|| {
                    Diagnostic::invalid_value(
                        key,
                        &format!("one of {}", NewLineKind::VALUES.join(", ")),
                        value,
                        defaults.new_line_kind,
                    )
                })?;
        }
        "trimTrailingWhitespace" => {
            config.trim_trailing_whitespace =
                parse_bool(key, value, defaults.trim_trailing_whitespace)?
        }
        "ensureFinalNewline" => {
            config.ensure_final_newline = parse_bool(key, value, defaults.ensure_final_newline)?
        }
        _ => return Err(Diagnostic::unknown_property(key)),
    }

    Ok(())
}

fn parse_bool(key: &str, value: &Value, default: bool) -> Result<bool, Diagnostic> {
    value
        .as_bool()
        .ok_or_else(|| Diagnostic::invalid_value(key, "a boolean", value, default))
}
