// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::info;

use crate::domain::models::extraction::ResponseSummary;
use crate::domain::models::worker_count::WorkerCount;
use crate::domain::services::aggregator::ResponseAggregator;
use crate::workers::pool::WorkerPool;

// === Section: Use Case Definition ===

/// 标题提取用例
///
/// 持有启动时配置的 URL 列表，每次请求用给定的并发数跑一遍工作池并汇总
pub struct ExtractTitlesUseCase {
    urls: Arc<[String]>,
    pool: WorkerPool,
}

// === Section: Implementation ===

impl ExtractTitlesUseCase {
    pub fn new(urls: Vec<String>, pool: WorkerPool) -> Self {
        Self {
            urls: urls.into(),
            pool,
        }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub async fn execute(&self, workers: WorkerCount) -> ResponseSummary {
        let results = self.pool.run(self.urls.clone(), workers).await;
        let summary = ResponseAggregator::aggregate(results);

        info!(
            workers = workers.get(),
            successful = summary.successful,
            failed = summary.failed,
            "Title extraction finished"
        );

        summary
    }
}
