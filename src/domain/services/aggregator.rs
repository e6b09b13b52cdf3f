// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::warn;

use crate::domain::models::extraction::{ExtractionResult, ResponseSummary};

/// 响应聚合器
///
/// 将全部提取结果汇总为与完成顺序无关的确定性摘要
pub struct ResponseAggregator;

impl ResponseAggregator {
    /// 汇总提取结果
    ///
    /// 成功的标题按字典序排序；失败只计数并记录日志，不进入响应体
    pub fn aggregate(results: Vec<ExtractionResult>) -> ResponseSummary {
        let mut summary = ResponseSummary::default();

        for result in results {
            match result.outcome {
                Ok(title) => {
                    summary.titles.push(title);
                    summary.successful += 1;
                }
                Err(e) => {
                    warn!(url = %result.url, kind = %e.kind(), error = %e, "Failed to extract title");
                    summary.failed += 1;
                }
            }
        }

        summary.titles.sort();
        summary
    }

    /// 序列化为 JSON 响应体
    pub fn serialize(summary: &ResponseSummary) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(summary)
    }
}
