// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 取消控制器
///
/// 所有目标的所有工作者共享同一个运行标志，工作者在每个单词开始前检查一次。
/// 清除标志不会中断正在进行的请求。
#[derive(Debug, Clone)]
pub struct CancellationController {
    running: Arc<AtomicBool>,
}

impl CancellationController {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// 请求停止
    ///
    /// 只有第一次调用会改变状态并返回 `true`
    pub fn cancel(&self) -> bool {
        self.running
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

impl Default for CancellationController {
    fn default() -> Self {
        Self::new()
    }
}
