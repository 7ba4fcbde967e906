// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理命令行参数、分层配置以及最终的扫描运行配置
pub mod cli;
pub mod scan_config;
pub mod settings;
