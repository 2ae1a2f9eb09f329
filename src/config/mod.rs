//! # 配置模块
//!
//! 读取原始配置并解析为强类型配置。
//!
//! ## 功能
//! - `loader`: 定位并加载 JSON 配置文件（失败即致命）
//! - `resolver`: 校验每个配置项，收集非致命诊断信息
//! - `types`: 已解析配置与诊断的数据模型
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 通过 `environment/` 读取文件
//! - 使用 `serde_json` 解析与序列化

pub mod loader;
pub mod resolver;
pub mod types;

pub use loader::resolve_config_file;
pub use resolver::resolve_configuration;
pub use types::{NewLineKind, ResolvedConfiguration};
