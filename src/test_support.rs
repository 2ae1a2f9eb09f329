//! # 测试用内存运行环境
//!
//! 记录每一次边界调用，可注入读/写失败。
//!
//! ## 依赖关系
//! - 仅被 `#[cfg(test)]` 测试使用
//! - 使用 `environment/discovery.rs` 的模式匹配规则

use crate::environment::discovery::{compile_pattern, FileCollector, MATCH_OPTIONS};
use crate::environment::Environment;
use crate::error::{BatchfmtError, Result};

use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// 一次边界调用记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Log(String),
    Warn(String),
    Glob(Vec<String>),
    Read(PathBuf),
    Write(PathBuf),
}

/// 内存文件系统
#[derive(Debug, Default)]
pub struct MemoryEnvironment {
    files: Mutex<BTreeMap<PathBuf, String>>,
    calls: Mutex<Vec<Call>>,
    failing_reads: HashSet<PathBuf>,
    failing_writes: HashSet<PathBuf>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, contents: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), contents.to_string());
        self
    }

    pub fn fail_read(mut self, path: &str) -> Self {
        self.failing_reads.insert(PathBuf::from(path));
        self
    }

    pub fn fail_write(mut self, path: &str) -> Self {
        self.failing_writes.insert(PathBuf::from(path));
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn logs(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Log(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Warn(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    /// glob、读、写调用次数
    pub fn io_call_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Glob(_) | Call::Read(_) | Call::Write(_)))
            .count()
    }

    pub fn reads(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Read(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn writes(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Write(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Environment for MemoryEnvironment {
    fn log(&self, message: &str) {
        self.record(Call::Log(message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.record(Call::Warn(message.to_string()));
    }

    fn glob(&self, patterns: &[String]) -> Result<Vec<PathBuf>> {
        self.record(Call::Glob(patterns.to_vec()));
        let collector = FileCollector::new(patterns)?;
        let files = self.files.lock().unwrap();
        let mut matched = Vec::new();
        for pattern in collector.includes() {
            let compiled = compile_pattern(pattern)?;
            for path in files.keys() {
                if compiled.matches_path_with(path, MATCH_OPTIONS)
                    && !collector.is_excluded(path)
                    && !matched.contains(path)
                {
                    matched.push(path.clone());
                }
            }
        }
        Ok(matched)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        self.record(Call::Read(path.to_path_buf()));
        if self.failing_reads.contains(path) {
            return Err(BatchfmtError::FileRead {
                path: path.display().to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read denied"),
            });
        }
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| BatchfmtError::FileRead {
                path: path.display().to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            })
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        self.record(Call::Write(path.to_path_buf()));
        if self.failing_writes.contains(path) {
            return Err(BatchfmtError::FileWrite {
                path: path.display().to_string(),
                source: io::Error::new(io::ErrorKind::Other, "disk full"),
            });
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
