// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::RawQuery,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};
use tracing::debug;

use crate::application::usecases::extract_titles::ExtractTitlesUseCase;
use crate::domain::models::worker_count::WorkerCount;
use crate::domain::services::aggregator::ResponseAggregator;
use crate::infrastructure::metrics::record_request;
use crate::presentation::errors::AppError;

/// 并发数查询参数名
pub const N_CONCURRENT_PARAM: &str = "n_concurrent";

/// 参数缺失或非法时的响应正文
pub const INVALID_N_CONCURRENT: &str = "missing or invalid n_concurrent parameter";

/// 提取配置中全部 URL 的标题
///
/// 只接受 GET；`n_concurrent` 必须是整数，超出 `[1, 4]` 的值会被收敛而不是拒绝
pub async fn extract_titles(
    method: Method,
    RawQuery(query): RawQuery,
    Extension(use_case): Extension<Arc<ExtractTitlesUseCase>>,
) -> Result<Response, AppError> {
    if method != Method::GET {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    let Some(requested) = parse_n_concurrent(query.as_deref()) else {
        debug!(query = ?query, "Rejected request without a valid n_concurrent");
        return Ok((StatusCode::BAD_REQUEST, INVALID_N_CONCURRENT).into_response());
    };

    record_request();
    let summary = use_case.execute(WorkerCount::clamped(requested)).await;
    let body = ResponseAggregator::serialize(&summary).context("failed to marshal json")?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// 读取第一个 `n_concurrent` 值并解析为整数
fn parse_n_concurrent(query: Option<&str>) -> Option<i64> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == N_CONCURRENT_PARAM)
        .and_then(|(_, value)| value.parse::<i64>().ok())
}
