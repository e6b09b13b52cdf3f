// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// 底层错误的装箱类型
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 传输层失败，无法获得响应
    #[error("failed to get response: {0}")]
    Network(#[source] BoxError),
    /// 响应状态码不是 200
    #[error("received unexpected response status code: {0}")]
    UnexpectedStatus(u16),
    /// 读取响应体失败
    #[error("failed to read response body: {0}")]
    Read(#[source] BoxError),
}

/// 页面抓取特质
///
/// 对给定 URL 执行 GET 请求并返回完整的原始响应体
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 执行抓取
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;

    /// 抓取器名称
    fn name(&self) -> &'static str;
}
