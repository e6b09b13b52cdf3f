// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

use thiserror::Error;

use crate::domain::services::title_parser::TitleParseError;
use crate::engines::traits::FetchError;

/// 单个 URL 提取失败的错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 无法与源站建立连接或传输失败
    Network,
    /// 源站返回了非 200 状态码
    UnexpectedStatus,
    /// 读取响应体时中断
    Read,
    /// 文档中没有或存在多个 `<title>` 标签
    MalformedDocument,
}

impl ErrorKind {
    /// 用作指标标签的稳定名称
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "network",
            ErrorKind::UnexpectedStatus => "unexpected_status",
            ErrorKind::Read => "read",
            ErrorKind::MalformedDocument => "malformed_document",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 提取错误
///
/// 抓取或解析阶段的错误，附带出错的源 URL 以便诊断
#[derive(Error, Debug)]
#[error("failed to extract title from {url}: {source}")]
pub struct ExtractionError {
    url: String,
    #[source]
    source: ExtractionErrorSource,
}

#[derive(Error, Debug)]
enum ExtractionErrorSource {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] TitleParseError),
}

impl ExtractionError {
    pub fn fetch(url: impl Into<String>, error: FetchError) -> Self {
        Self {
            url: url.into(),
            source: error.into(),
        }
    }

    pub fn parse(url: impl Into<String>, error: TitleParseError) -> Self {
        Self {
            url: url.into(),
            source: error.into(),
        }
    }

    /// 出错的源 URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// 错误分类
    pub fn kind(&self) -> ErrorKind {
        match &self.source {
            ExtractionErrorSource::Fetch(FetchError::Network(_)) => ErrorKind::Network,
            ExtractionErrorSource::Fetch(FetchError::UnexpectedStatus(_)) => {
                ErrorKind::UnexpectedStatus
            }
            ExtractionErrorSource::Fetch(FetchError::Read(_)) => ErrorKind::Read,
            ExtractionErrorSource::Parse(_) => ErrorKind::MalformedDocument,
        }
    }
}
