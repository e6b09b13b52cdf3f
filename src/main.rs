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

use std::sync::Arc;

use title_extractor::application::usecases::extract_titles::ExtractTitlesUseCase;
use title_extractor::config::settings::Settings;
use title_extractor::domain::services::extraction_service::ExtractionService;
use title_extractor::engines::reqwest_engine::ReqwestFetcher;
use title_extractor::infrastructure::metrics;
use title_extractor::presentation::routes;
use title_extractor::utils::telemetry;
use title_extractor::workers::WorkerPool;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting title-extractor...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize Prometheus Metrics
    metrics::init_metrics(&settings.metrics)?;

    if settings.extractor.urls.is_empty() {
        warn!("No URLs configured, every request will return an empty summary");
    }
    for url in &settings.extractor.urls {
        if let Err(e) = url::Url::parse(url) {
            warn!(url = %url, error = %e, "Configured URL does not parse and will fail to fetch");
        }
    }

    // 4. Initialize Components
    let fetcher = Arc::new(ReqwestFetcher::new(&settings.fetch)?);
    let pool = WorkerPool::new(ExtractionService::new(fetcher));
    let use_case = Arc::new(ExtractTitlesUseCase::new(
        settings.extractor.urls.clone(),
        pool,
    ));
    info!(urls = use_case.urls().len(), "Extraction pipeline initialized");

    // 5. Start HTTP server
    let app = routes::routes(use_case);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server closed");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            error!("Unable to listen for shutdown signal: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
