// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了扫描的核心数据：
/// - 探测结果（probe）：单次HTTP交互的状态码与地址
/// - 结果集（result_set）：按状态码分组的全部探测结果
pub mod probe;
pub mod result_set;
