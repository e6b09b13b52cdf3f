// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use crate::application::usecases::extract_titles::ExtractTitlesUseCase;
use crate::presentation::errors::handle_panic;
use crate::presentation::handlers::titles_handler;
use axum::{
    routing::{any, get},
    Extension, Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `use_case` - 标题提取用例
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(use_case: Arc<ExtractTitlesUseCase>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    // Method filtering happens in the handler so every non-GET verb gets a bare 405
    let extract_routes = Router::new()
        .route("/extract-titles", any(titles_handler::extract_titles))
        .layer(Extension(use_case));

    Router::new()
        .merge(public_routes)
        .merge(extract_routes)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
