//! # 命令执行模块
//!
//! 根据 `CommandLineOptions::mode()` 分派执行模式。
//!
//! ## 模式
//! - help / version: 仅一次 `log`，不做任何文件 I/O
//! - list-files: 解析配置（输出诊断），展开模式，逐行输出路径
//! - print-config: 解析配置（输出诊断），输出序列化后的配置
//! - format: 解析配置（输出诊断），展开模式，并行读-转换-写
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `config/`, `environment/`, `batch/`
//! - 子模块: format, list_files, print_config

pub mod format;
pub mod list_files;
pub mod print_config;

use crate::cli::{self, CommandLineOptions, Mode};
use crate::config::{self, ResolvedConfiguration};
use crate::environment::Environment;
use crate::error::Result;

use std::path::Path;

/// 执行一次调用
///
/// `transform` 为单文件转换函数，须为纯函数且可跨线程共享。
pub fn run_cli<E, T>(options: &CommandLineOptions, environment: &E, transform: &T) -> Result<()>
where
    E: Environment,
    T: Fn(&Path, &str, &ResolvedConfiguration) -> Result<String> + Sync,
{
    let mode = options.mode();
    log::debug!("Selected mode: {:?}", mode);

    match mode {
        Mode::Help => {
            environment.log(&cli::help_text());
            Ok(())
        }
        Mode::Version => {
            environment.log(cli::version_text());
            Ok(())
        }
        Mode::ListFiles => list_files::execute(options, environment),
        Mode::PrintConfig => print_config::execute(options, environment),
        Mode::Format => format::execute(options, environment, transform),
    }
}

/// 加载并解析配置，诊断信息按顺序经 `warn` 输出
fn load_configuration<E: Environment>(
    options: &CommandLineOptions,
    environment: &E,
) -> Result<ResolvedConfiguration> {
    let raw = config::resolve_config_file(options.config.as_deref(), environment)?;
    let result = config::resolve_configuration(raw);

    for diagnostic in &result.diagnostics {
        log::debug!("Configuration issue in '{}'", diagnostic.property_name);
        environment.warn(&diagnostic.message);
    }

    Ok(result.config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BatchfmtError;
    use crate::test_support::{Call, MemoryEnvironment};

    fn unused_transform(_: &Path, _: &str, _: &ResolvedConfiguration) -> Result<String> {
        panic!("transform must not be called")
    }

    #[test]
    fn test_help_logs_once_without_io() {
        let env = MemoryEnvironment::new().with_file("a.txt", "x");
        let options = CommandLineOptions {
            show_help: true,
            show_version: true,
            output_file_paths: true,
            file_patterns: vec!["*.txt".to_string()],
            ..Default::default()
        };

        run_cli(&options, &env, &unused_transform).unwrap();

        assert_eq!(env.calls(), vec![Call::Log(cli::help_text())]);
        assert_eq!(env.io_call_count(), 0);
    }

    #[test]
    fn test_version_logs_once_without_io() {
        let env = MemoryEnvironment::new().with_file("fmt.json", r#"{"bogus": 1}"#);
        let options = CommandLineOptions {
            show_version: true,
            config: Some("fmt.json".into()),
            output_resolved_config: true,
            ..Default::default()
        };

        run_cli(&options, &env, &unused_transform).unwrap();

        assert_eq!(
            env.calls(),
            vec![Call::Log(env!("CARGO_PKG_VERSION").to_string())]
        );
    }

    #[test]
    fn test_config_load_error_stops_before_discovery() {
        let env = MemoryEnvironment::new().with_file("a.txt", "x");
        let options = CommandLineOptions {
            config: Some("missing.json".into()),
            file_patterns: vec!["*.txt".to_string()],
            ..Default::default()
        };

        let err = run_cli(&options, &env, &unused_transform).unwrap_err();

        assert!(matches!(err, BatchfmtError::ConfigLoad { .. }));
        assert!(!env.calls().iter().any(|c| matches!(c, Call::Glob(_))));
        assert!(env.writes().is_empty());
    }
}
