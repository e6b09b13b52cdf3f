// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 提供并发提取标题的工作池
pub mod pool;

pub use pool::WorkerPool;
