// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::debug;

use crate::domain::models::extraction::ExtractionResult;
use crate::domain::models::worker_count::WorkerCount;
use crate::domain::services::extraction_service::ExtractionService;
use crate::infrastructure::metrics::record_extraction;

/// 标题提取工作池
///
/// 启动固定数量的 worker，共享一个原子游标作为工作队列。
/// 每个 worker 不断领取下一个 URL，提取后把带原始下标的结果发送给唯一的收集者。
/// 单个 URL 的失败不会影响其它 URL。
#[derive(Clone)]
pub struct WorkerPool {
    extractor: ExtractionService,
}

impl WorkerPool {
    pub fn new(extractor: ExtractionService) -> Self {
        Self { extractor }
    }

    /// 并发提取全部 URL
    ///
    /// # 参数
    ///
    /// * `urls` - 只读 URL 列表，由所有 worker 共享
    /// * `workers` - 已收敛的 worker 数量
    ///
    /// # 返回值
    ///
    /// 与 `urls` 一一对应的结果，`result[i]` 对应 `urls[i]`
    ///
    /// # Panics
    ///
    /// worker panic 时在调用方重新抛出
    pub async fn run(&self, urls: Arc<[String]>, workers: WorkerCount) -> Vec<ExtractionResult> {
        let total = urls.len();
        let cursor = Arc::new(AtomicUsize::new(0));
        let (tx, mut rx) = mpsc::unbounded_channel::<(usize, ExtractionResult)>();
        let mut handles = JoinSet::new();

        debug!(urls = total, workers = workers.get(), "Starting worker pool");

        for worker_id in 0..workers.get() {
            let urls = urls.clone();
            let cursor = cursor.clone();
            let tx = tx.clone();
            let extractor = self.extractor.clone();

            handles.spawn(async move {
                let mut processed = 0usize;
                loop {
                    // Each index is handed out exactly once
                    let index = cursor.fetch_add(1, Ordering::Relaxed);
                    let Some(url) = urls.get(index) else {
                        break;
                    };

                    let started = Instant::now();
                    let outcome = extractor.extract(url).await;
                    record_extraction(&outcome, started.elapsed());

                    processed += 1;
                    if tx.send((index, ExtractionResult::new(url.as_str(), outcome))).is_err() {
                        break;
                    }
                }
                debug!(worker_id, processed, "Worker finished");
            });
        }
        drop(tx);

        // Only the collector writes the slots; slot i is filled by the result for urls[i]
        let mut slots: Vec<Option<ExtractionResult>> = (0..total).map(|_| None).collect();
        while let Some((index, result)) = rx.recv().await {
            slots[index] = Some(result);
        }

        while let Some(joined) = handles.join_next().await {
            if let Err(e) = joined {
                if e.is_panic() {
                    std::panic::resume_unwind(e.into_panic());
                }
            }
        }

        slots
            .into_iter()
            .map(|slot| slot.expect("every url yields exactly one result"))
            .collect()
    }
}

#[cfg(test)]
#[path = "pool_test.rs"]
mod tests;
