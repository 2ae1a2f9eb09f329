//! # 工具函数模块
//!
//! 提供美化输出工具。
//!
//! ## 依赖关系
//! - 被 `environment/`、`main.rs` 使用
//! - 子模块: output

pub mod output;
