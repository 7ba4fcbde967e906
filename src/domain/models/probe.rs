// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 探测结果
///
/// 一次成功完成的HTTP交互，传输失败不会产生探测结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// HTTP状态码
    pub status_code: u16,
    /// 请求的地址
    pub requested_url: String,
    /// 跟随重定向后的最终地址
    pub resolved_url: String,
}

impl ProbeResult {
    pub fn new(status_code: u16, requested_url: String, resolved_url: String) -> Self {
        Self {
            status_code,
            requested_url,
            resolved_url,
        }
    }

    pub fn bucket(&self) -> StatusBucket {
        StatusBucket::classify(self.status_code)
    }
}

/// 状态码分类，仅用于实时输出
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    Success,
    Redirect,
    ClientError,
    Error,
}

impl StatusBucket {
    pub fn classify(status_code: u16) -> Self {
        match status_code {
            200 => StatusBucket::Success,
            300..=304 => StatusBucket::Redirect,
            400..=403 => StatusBucket::ClientError,
            _ => StatusBucket::Error,
        }
    }
}

impl fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusBucket::Success => write!(f, "success"),
            StatusBucket::Redirect => write!(f, "redirect"),
            StatusBucket::ClientError => write!(f, "client_error"),
            StatusBucket::Error => write!(f, "error"),
        }
    }
}
