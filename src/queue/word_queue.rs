// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 单词工作队列
///
/// 在工作者启动前一次性填充完毕，之后只出队不入队。
/// 每个单词只会被一个工作者取出一次。
#[derive(Debug, Default)]
pub struct WordQueue {
    words: Mutex<VecDeque<String>>,
    unfinished: AtomicUsize,
}

impl WordQueue {
    /// 出队一个单词，队列为空时返回 `None`
    pub fn pop(&self) -> Option<String> {
        self.words.lock().pop_front()
    }

    /// 标记一个已出队的单词处理完成
    ///
    /// 每个出队的单词在其全部候选路径尝试完之后调用一次
    pub fn task_done(&self) {
        let _ = self
            .unfinished
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
    }

    /// 尚未出队的单词数
    pub fn len(&self) -> usize {
        self.words.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.lock().is_empty()
    }

    /// 尚未标记完成的单词数（包括已出队正在处理的）
    pub fn unfinished(&self) -> usize {
        self.unfinished.load(Ordering::Acquire)
    }
}

impl FromIterator<String> for WordQueue {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let words: VecDeque<String> = iter.into_iter().collect();
        let unfinished = AtomicUsize::new(words.len());
        Self {
            words: Mutex::new(words),
            unfinished,
        }
    }
}
