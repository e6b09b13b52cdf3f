// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

use crate::config::settings::MetricsSettings;
use crate::utils::errors::ExtractionError;

/// 初始化指标系统
///
/// 未启用时不安装 recorder，所有指标宏均为空操作
pub fn init_metrics(settings: &MetricsSettings) -> anyhow::Result<()> {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return Ok(());
    }

    let addr: SocketAddr = settings.listen_addr.parse()?;

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return Ok(());
    }

    describe_counter!(
        "title_requests_total",
        "Total number of title extraction requests served"
    );
    describe_counter!(
        "title_extractions_total",
        "Total number of per-URL title extractions by outcome"
    );
    describe_histogram!(
        "title_extraction_duration_seconds",
        "Duration of a single URL fetch and parse in seconds"
    );

    info!("Metrics exporter listening on {}", addr);
    Ok(())
}

pub fn record_request() {
    counter!("title_requests_total").increment(1);
}

/// 记录单个 URL 的提取结果与耗时
pub fn record_extraction(outcome: &Result<String, ExtractionError>, elapsed: Duration) {
    match outcome {
        Ok(_) => counter!("title_extractions_total", "outcome" => "success").increment(1),
        Err(e) => counter!(
            "title_extractions_total",
            "outcome" => "failure",
            "kind" => e.kind().as_str()
        )
        .increment(1),
    }
    histogram!("title_extraction_duration_seconds").record(elapsed.as_secs_f64());
}
