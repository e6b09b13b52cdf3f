// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use title_extractor::utils::telemetry;

    #[test]
    fn test_telemetry_initialization() {
        // 初始化遥测系统
        telemetry::init_telemetry();

        tracing::debug!("This is a debug message");
        tracing::info!("This is an info message");
        tracing::warn!("This is a warning message");

        // 测试结构化日志
        tracing::info!(
            url = "http://example.com/",
            successful = 1,
            failed = 0,
            "Title extraction finished"
        );

        // 再次初始化会因全局订阅者已设置而 panic
        let second = std::panic::catch_unwind(telemetry::init_telemetry);
        assert!(second.is_err());
    }
}
