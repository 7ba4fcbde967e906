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

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::scan_config::ScanConfig;
use crate::domain::models::probe::{ProbeResult, StatusBucket};
use crate::domain::services::candidate_expander;
use crate::engines::traits::ProbeEngine;
use crate::queue::WordQueue;
use crate::utils::url_utils;
use crate::workers::aggregator::ResultSink;
use crate::workers::cancellation::CancellationController;

/// 探测工作者
///
/// 不断从目标的队列中取出单词，展开为候选路径并逐一探测
pub struct ProbeWorker {
    worker_id: usize,
    target: Url,
    config: Arc<ScanConfig>,
    engine: Arc<dyn ProbeEngine>,
    sink: ResultSink,
    cancellation: CancellationController,
}

impl ProbeWorker {
    /// 创建新的探测工作者实例
    pub fn new(
        worker_id: usize,
        target: Url,
        config: Arc<ScanConfig>,
        engine: Arc<dyn ProbeEngine>,
        sink: ResultSink,
        cancellation: CancellationController,
    ) -> Self {
        Self {
            worker_id,
            target,
            config,
            engine,
            sink,
            cancellation,
        }
    }

    /// 运行探测工作者
    ///
    /// 队列为空或在取下一个单词前发现已取消时退出，返回处理过的单词数
    #[instrument(skip_all, fields(worker = self.worker_id, target = %self.target))]
    pub async fn run(&self, queue: Arc<WordQueue>) -> usize {
        let mut processed = 0;

        loop {
            if !self.cancellation.is_running() {
                debug!("Cancellation observed, stopping");
                break;
            }

            let Some(word) = queue.pop() else {
                break;
            };

            self.probe_word(&word).await;
            queue.task_done();
            processed += 1;
        }

        debug!(processed, "Worker finished");
        processed
    }

    async fn probe_word(&self, word: &str) {
        for candidate in candidate_expander::expand(word, &self.config.extensions) {
            let url = match url_utils::resolve_url(&self.target, &candidate) {
                Ok(url) => url,
                Err(e) => {
                    warn!(candidate = %candidate, error = %e, "Skipping unresolvable candidate");
                    continue;
                }
            };

            match self.engine.probe(&url).await {
                Ok(response) => {
                    let result =
                        ProbeResult::new(response.status_code, url.to_string(), response.final_url);
                    self.report(&result);

                    if self.sink.send(result).is_err() {
                        warn!(url = %url, "Result sink closed, dropping result");
                    }
                }
                Err(e) if e.is_timeout() => {
                    warn!(url = %url, "Request timed out");
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "Request failed");
                }
            }
        }
    }

    fn report(&self, result: &ProbeResult) {
        let bucket = result.bucket();
        if bucket == StatusBucket::Success || self.config.show_all {
            info!(
                status = result.status_code,
                bucket = %bucket,
                "{} -> {} ({})",
                result.status_code,
                result.requested_url,
                result.resolved_url
            );
        }
    }
}

#[cfg(test)]
#[path = "probe_worker_test.rs"]
mod tests;
