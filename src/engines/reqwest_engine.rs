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

use crate::engines::traits::{EngineError, ProbeEngine, ProbeResponse};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// 探测引擎
///
/// 基于reqwest实现，所有工作者共享同一个连接池
#[derive(Debug, Clone)]
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 创建新的引擎
    ///
    /// # 参数
    ///
    /// * `user_agent` - 每个请求携带的User-Agent
    /// * `timeout` - 单个请求的超时时间
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ProbeEngine for ReqwestEngine {
    /// 执行HTTP探测
    ///
    /// 重定向会被跟随，响应体不会被读取
    async fn probe(&self, url: &Url) -> Result<ProbeResponse, EngineError> {
        let response = self.client.get(url.clone()).send().await?;

        Ok(ProbeResponse {
            status_code: response.status().as_u16(),
            final_url: response.url().to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
