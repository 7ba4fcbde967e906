// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含扫描的核心数据与规则：
/// - 领域模型（models）：探测结果和结果集
/// - 服务（services）：候选路径展开
///
/// 领域层不依赖网络或文件系统。
pub mod models;
pub mod services;
