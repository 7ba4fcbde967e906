// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 负责与文件系统的交互：结果文件路径推导和JSON持久化
pub mod storage;
