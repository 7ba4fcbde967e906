// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 提供并发探测、取消控制和结果汇总
pub mod aggregator;
pub mod cancellation;
pub mod manager;
pub mod probe_worker;

pub use cancellation::CancellationController;
pub use manager::WorkerManager;
