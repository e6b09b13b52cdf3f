// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

use crate::utils::errors::ExtractionError;

/// 单个 URL 的提取结果
///
/// 每个 URL 恰好产生一个结果，由处理它的 worker 创建，之后不再修改
#[derive(Debug)]
pub struct ExtractionResult {
    /// 源 URL
    pub url: String,
    /// 标题或错误
    pub outcome: Result<String, ExtractionError>,
}

impl ExtractionResult {
    pub fn new(url: impl Into<String>, outcome: Result<String, ExtractionError>) -> Self {
        Self {
            url: url.into(),
            outcome,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// 标题提取响应摘要
///
/// `titles` 按字典序排列，失败只体现在 `failed` 计数中
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResponseSummary {
    pub titles: Vec<String>,
    pub successful: usize,
    pub failed: usize,
}
