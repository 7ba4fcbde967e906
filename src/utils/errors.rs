// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use thiserror::Error;

/// 扫描错误类型
///
/// 这些错误都发生在任何探测开始之前或全部探测结束之后，
/// 单个探测的传输错误见 [`crate::engines::traits::EngineError`]
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("无法读取字典文件 {path}: {source}")]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("无效的目标地址 {target}: {source}")]
    InvalidTarget {
        target: String,
        #[source]
        source: url::ParseError,
    },

    #[error("无效配置: {0}")]
    InvalidConfig(String),

    #[error("结果文件读写失败 {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("结果序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}
