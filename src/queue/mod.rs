// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 队列模块
///
/// 负责读取字典并构建每个目标独立的单词工作队列
pub mod word_list;
pub mod word_queue;

pub use word_queue::WordQueue;
