//! # 批次收集器
//!
//! 解析所有输入路径并聚合为批次。
//!
//! ## 功能
//! - 基于 rayon 的并行路径解析（只读文件系统探测）
//! - 按输入顺序聚合，批次组成与串行执行一致
//! - 单个路径失败时报告并跳过
//!
//! ## 依赖关系
//! - 被 `commands/fix.rs` 调用
//! - 使用 `resolver/` 解析路径
//! - 使用 `utils/progress.rs` 创建进度条

use crate::error::{Result, StyleFixError};
use crate::models::BatchList;
use crate::resolver::{self, Resolution};
use crate::utils::{output, progress};

use rayon::prelude::*;
use std::path::PathBuf;
use tracing::warn;

/// 少于该数量的输入不显示进度条
const PROGRESS_THRESHOLD: usize = 64;

/// 收集结果
#[derive(Debug, Default)]
pub struct CollectResult {
    pub batches: BatchList,
    /// 被跳过的输入数量
    pub skipped: usize,
}

/// 批次收集器
pub struct BatchCollector {
    /// 并行作业数
    jobs: usize,
}

impl BatchCollector {
    /// 创建新的收集器，`jobs == 0` 时使用 CPU 核数
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 解析输入并聚合为批次
    pub fn collect(&self, inputs: &[PathBuf]) -> Result<CollectResult> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| StyleFixError::ThreadPool(e.to_string()))?;

        let pb = (inputs.len() >= PROGRESS_THRESHOLD)
            .then(|| progress::create_progress_bar(inputs.len() as u64, "Resolving"));

        // par_iter().collect() 保持输入顺序
        let resolutions: Vec<Result<Resolution>> = pool.install(|| {
            inputs
                .par_iter()
                .map(|input| {
                    let res = resolver::resolve(input);
                    if let Some(pb) = &pb {
                        pb.inc(1);
                    }
                    res
                })
                .collect()
        });

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        let mut result = CollectResult::default();
        for resolution in resolutions {
            match resolution {
                Ok(Resolution { target, walk_error }) => {
                    if let Some(e) = walk_error {
                        warn!(error = %e, "walk aborted, using defaults");
                        output::print_warning(&e.to_string());
                    }
                    result.batches.add_target(target);
                }
                Err(e) => {
                    warn!(error = %e, "skipping input");
                    output::print_error(&e.to_string());
                    result.skipped += 1;
                }
            }
        }

        Ok(result)
    }
}
