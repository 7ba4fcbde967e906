// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// 引擎错误类型
///
/// 单个候选路径的传输失败，不会中断工作者
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

impl EngineError {
    /// 判断是否为超时错误
    pub fn is_timeout(&self) -> bool {
        match self {
            EngineError::RequestFailed(e) => e.is_timeout(),
            EngineError::Other(_) => false,
        }
    }
}

/// 探测响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 跟随重定向后的最终地址
    pub final_url: String,
}

/// 探测引擎特质
///
/// 所有工作者共享同一个引擎实例，实现必须支持并发调用
#[async_trait]
pub trait ProbeEngine: Send + Sync {
    /// 对一个地址发起GET请求
    async fn probe(&self, url: &Url) -> Result<ProbeResponse, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
