// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use url::Url;

use crate::config::scan_config::ScanConfig;
use crate::domain::models::probe::ProbeResult;
use crate::domain::models::result_set::ResultSet;
use crate::engines::traits::ProbeEngine;
use crate::queue::word_list::load_word_list;
use crate::queue::WordQueue;
use crate::utils::errors::ScanError;
use crate::workers::aggregator::{self, ResultSink};
use crate::workers::cancellation::CancellationController;
use crate::workers::probe_worker::ProbeWorker;

/// 工作管理器
///
/// 为每个目标启动一组工作者，所有工作者共享同一个结果通道和取消控制器
pub struct WorkerManager {
    config: Arc<ScanConfig>,
    engine: Arc<dyn ProbeEngine>,
    cancellation: CancellationController,
    sink: Option<ResultSink>,
    receiver: mpsc::UnboundedReceiver<ProbeResult>,
    queues: Vec<(Url, Arc<WordQueue>)>,
    handles: Vec<JoinHandle<usize>>,
}

impl WorkerManager {
    pub fn new(
        config: Arc<ScanConfig>,
        engine: Arc<dyn ProbeEngine>,
        cancellation: CancellationController,
    ) -> Self {
        let (sink, receiver) = aggregator::result_channel();
        Self {
            config,
            engine,
            cancellation,
            sink: Some(sink),
            receiver,
            queues: Vec::new(),
            handles: Vec::new(),
        }
    }

    /// 执行完整的扫描
    ///
    /// 先为每个目标构建队列，字典读取失败时不会启动任何工作者；
    /// 然后启动全部工作者，等待它们结束后汇总结果
    pub async fn scan(
        config: Arc<ScanConfig>,
        engine: Arc<dyn ProbeEngine>,
        cancellation: CancellationController,
    ) -> Result<ResultSet, ScanError> {
        let mut queues = Vec::with_capacity(config.targets.len());
        for target in &config.targets {
            info!(target = %target, "Building word list");
            let queue = load_word_list(&config.word_list, config.resume.as_deref()).await?;
            info!(target = %target, words = queue.len(), "Word list ready");
            queues.push((target.clone(), Arc::new(queue)));
        }

        let mut manager = Self::new(config, engine, cancellation);
        for (target, queue) in queues {
            manager.start_workers(target, queue);
        }
        info!(
            engine = manager.engine.name(),
            "{} total workers started",
            manager.handles.len()
        );

        Ok(manager.join().await)
    }

    /// 为一个目标启动工作者
    ///
    /// 队列必须已经填充完毕
    pub fn start_workers(&mut self, target: Url, queue: Arc<WordQueue>) {
        let Some(sink) = &self.sink else {
            return;
        };

        for worker_id in 0..self.config.max_threads {
            let worker = ProbeWorker::new(
                worker_id,
                target.clone(),
                self.config.clone(),
                self.engine.clone(),
                sink.clone(),
                self.cancellation.clone(),
            );

            let queue = queue.clone();
            let handle = tokio::spawn(async move { worker.run(queue).await });
            self.handles.push(handle);
        }

        self.queues.push((target, queue));
    }

    /// 等待所有工作者结束并汇总结果
    ///
    /// 只有在全部工作者退出之后才读取结果通道
    pub async fn join(mut self) -> ResultSet {
        self.sink.take();

        let mut words = 0;
        for outcome in join_all(self.handles.drain(..)).await {
            match outcome {
                Ok(processed) => words += processed,
                Err(e) => error!("Worker task failed: {}", e),
            }
        }

        for (target, queue) in &self.queues {
            if !queue.is_empty() {
                info!(target = %target, remaining = queue.len(), "Words left unprobed");
            }
            debug!(target = %target, unfinished = queue.unfinished(), "Target queue closed");
        }

        let results = aggregator::aggregate(&mut self.receiver);
        info!(words, results = results.len(), "Scan finished");
        for (status, count) in results.summary() {
            info!(status, count, "Results by status");
        }
        results
    }
}
