// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 编排工作池与聚合器的用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含提取结果模型以及标题解析、提取和聚合服务
pub mod domain;

/// 引擎模块
///
/// 页面抓取特质及其 reqwest 实现
pub mod engines;

/// 基础设施模块
///
/// 提供指标导出等外部集成
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由和处理器
pub mod presentation;

/// 工具模块
///
/// 提供错误类型和遥测等通用功能
pub mod utils;

/// 工作器模块
///
/// 实现有界并发的标题提取工作池
pub mod workers;
