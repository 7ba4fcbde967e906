// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理命令行参数、配置文件和环境变量
pub mod config;

/// 领域模块
///
/// 包含探测结果、结果集以及候选路径展开规则
pub mod domain;

/// 引擎模块
///
/// 实现HTTP探测引擎
pub mod engines;

/// 基础设施模块
///
/// 提供结果文件的持久化
pub mod infrastructure;

/// 队列模块
///
/// 实现字典读取和单词工作队列
pub mod queue;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;

/// 工作器模块
///
/// 实现并发探测、取消控制和结果汇总
pub mod workers;
