// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 最少 worker 数
pub const MIN_WORKERS: usize = 1;
/// 最多 worker 数
pub const MAX_WORKERS: usize = 4;

/// 并发 worker 数量，始终位于 `[MIN_WORKERS, MAX_WORKERS]` 区间内
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerCount(usize);

impl WorkerCount {
    /// 将请求的并发数收敛到允许区间
    pub fn clamped(requested: i64) -> Self {
        let value = clamp_int(requested, MIN_WORKERS as i64, MAX_WORKERS as i64);
        Self(value as usize)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// 将 `value` 限制在 `[min, max]` 之间
///
/// # Panics
///
/// `min > max` 属于调用方的契约错误，直接 panic
pub fn clamp_int(value: i64, min: i64, max: i64) -> i64 {
    assert!(min <= max, "min {} is greater than max {}", min, max);
    value.clamp(min, max)
}
