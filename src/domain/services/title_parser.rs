// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::bytes::Regex;
use thiserror::Error;

/// `<title>` 标签匹配模式，进程内只编译一次
///
/// 区分大小写、非贪婪、可跨行；按字节匹配，非 UTF-8 内容同样可被捕获
static TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s-u)<title>(.*?)</title>").expect("title pattern is a valid regex")
});

/// 标题解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TitleParseError {
    /// 文档中 `<title>` 标签数量不为 1
    #[error("invalid number of title matches: {0}")]
    MalformedDocument(usize),
}

/// 标题解析器
///
/// 从原始 HTML 字节中提取唯一的 `<title>` 文本，解码 HTML 实体并去除首尾空白。
/// 无状态，可在多个 worker 之间并发使用。
pub struct TitleParser;

impl TitleParser {
    /// 解析标题
    ///
    /// # 参数
    ///
    /// * `body` - 原始响应体
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 规范化后的标题
    /// * `Err(TitleParseError)` - 没有或存在多个 `<title>` 标签
    pub fn parse(body: &[u8]) -> Result<String, TitleParseError> {
        let mut captures = TITLE_REGEX.captures_iter(body);

        let first = match captures.next() {
            Some(caps) => caps,
            None => return Err(TitleParseError::MalformedDocument(0)),
        };

        let extra = captures.count();
        if extra > 0 {
            return Err(TitleParseError::MalformedDocument(extra + 1));
        }

        let raw = first.get(1).map(|m| m.as_bytes()).unwrap_or_default();
        let text = String::from_utf8_lossy(raw);
        let decoded = html_escape::decode_html_entities(&text);

        Ok(decoded.trim().to_string())
    }
}

#[cfg(test)]
#[path = "title_parser_test.rs"]
mod tests;
