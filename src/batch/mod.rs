//! # 批量处理模块
//!
//! 提供统一的文件批量处理能力。
//!
//! ## 功能
//! - 有界并行处理
//! - 错误隔离与汇总
//!
//! ## 依赖关系
//! - 被 `commands/format.rs` 使用
//! - 使用 `rayon` 进行并行处理

pub mod runner;

pub use runner::BatchRunner;
