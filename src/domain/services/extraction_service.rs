// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use crate::domain::services::title_parser::TitleParser;
use crate::engines::traits::PageFetcher;
use crate::utils::errors::ExtractionError;

/// 提取服务
///
/// 先抓取后解析，遇到第一个错误即返回，并附带出错的 URL
#[derive(Clone)]
pub struct ExtractionService {
    fetcher: Arc<dyn PageFetcher>,
}

impl ExtractionService {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// 提取单个 URL 的标题
    pub async fn extract(&self, url: &str) -> Result<String, ExtractionError> {
        let body = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|e| ExtractionError::fetch(url, e))?;

        TitleParser::parse(&body).map_err(|e| ExtractionError::parse(url, e))
    }
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
