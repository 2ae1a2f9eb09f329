//! # 批量执行器
//!
//! 在固定大小的线程池中并行执行单文件任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，线程数即并发上限
//! - 所有任务一次性提交，任一任务失败不会取消其他任务
//! - 按提交顺序汇总结果，返回顺序上的第一个失败
//!
//! ## 依赖关系
//! - 被 `commands/format.rs` 调用
//! - 使用 `rayon` 进行并行计算

use crate::error::{BatchfmtError, Result};

use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug)]
pub struct ProcessResult {
    pub path: PathBuf,
    pub outcome: Result<()>,
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败详情（按提交顺序）
    pub failures: Vec<(PathBuf, BatchfmtError)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result.outcome {
            Ok(()) => self.success += 1,
            Err(err) => self.failures.push((result.path, err)),
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failures.len()
    }

    /// 全部成功则返回成功数，否则返回第一个失败
    pub fn into_result(self) -> Result<usize> {
        match self.failures.into_iter().next() {
            Some((_, err)) => Err(err),
            None => Ok(self.success),
        }
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 表示使用 CPU 核数）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理文件列表，等待所有任务结束后汇总
    pub fn run<F>(&self, files: &[PathBuf], processor: F) -> Result<BatchResult>
    where
        F: Fn(&Path) -> Result<()> + Sync + Send,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| BatchfmtError::ThreadPool(e.to_string()))?;

        let results: Vec<ProcessResult> = pool.install(|| {
            files
                .par_iter()
                .map(|file| ProcessResult {
                    path: file.clone(),
                    outcome: processor(file),
                })
                .collect()
        });

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    fn failure(path: &Path) -> BatchfmtError {
        BatchfmtError::Transform {
            path: path.display().to_string(),
            reason: "boom".to_string(),
        }
    }

    #[test]
    fn test_zero_jobs_means_auto() {
        assert_eq!(BatchRunner::new(0).jobs(), num_cpus::get());
        assert_eq!(BatchRunner::new(3).jobs(), 3);
    }

    #[test]
    fn test_all_tasks_run_despite_failures() {
        let files = paths(&["a", "b", "c", "d"]);
        let visited = AtomicUsize::new(0);

        let result = BatchRunner::new(2)
            .run(&files, |path| {
                visited.fetch_add(1, Ordering::SeqCst);
                if path == Path::new("b") || path == Path::new("d") {
                    Err(failure(path))
                } else {
                    Ok(())
                }
            })
            .unwrap();

        assert_eq!(visited.load(Ordering::SeqCst), 4);
        assert_eq!(result.total(), 4);
        assert_eq!(result.success, 2);
        let failed: Vec<&Path> = result.failures.iter().map(|(p, _)| p.as_path()).collect();
        assert_eq!(failed, vec![Path::new("b"), Path::new("d")]);

        let err = result.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Failed to format file: b\nReason: boom");
    }

    #[test]
    fn test_empty_batch_succeeds() {
        let result = BatchRunner::new(1).run(&[], |_| Ok(())).unwrap();
        assert_eq!(result.into_result().unwrap(), 0);
    }
}
