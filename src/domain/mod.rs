// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模块
///
/// 包含提取结果模型与标题解析、提取、聚合服务
pub mod models;
pub mod services;
