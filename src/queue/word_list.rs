// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::Path;
use tracing::{debug, info};

use crate::queue::word_queue::WordQueue;
use crate::utils::errors::ScanError;

/// 读取字典文件并构建工作队列
///
/// # 参数
///
/// * `path` - 字典文件路径
/// * `resume` - 断点续扫标记，见 [`build_queue`]
///
/// # 返回值
///
/// * `Ok(WordQueue)` - 按文件顺序填充的队列
/// * `Err(ScanError::WordList)` - 文件不存在或不可读
pub async fn load_word_list(path: &Path, resume: Option<&str>) -> Result<WordQueue, ScanError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ScanError::WordList {
            path: path.to_path_buf(),
            source,
        })?;

    let queue = build_queue(content.lines(), resume);
    debug!(path = %path.display(), words = queue.len(), "Word list loaded");
    Ok(queue)
}

/// 由字典行构建工作队列
///
/// 每行去除首尾空白后按顺序入队。设置了 `resume` 时，
/// 在遇到与其完全相等的行之前的所有行都被丢弃，匹配行本身也不入队，
/// 之后的行全部入队；标记从未出现则队列为空。
pub fn build_queue<'a, I>(lines: I, resume: Option<&str>) -> WordQueue
where
    I: IntoIterator<Item = &'a str>,
{
    let mut resuming = resume.is_none();
    let mut words = Vec::new();

    for word in lines.into_iter().map(str::trim) {
        if resuming {
            words.push(word.to_string());
        } else if Some(word) == resume {
            resuming = true;
            info!(word, "Resuming scan");
        }
    }

    words.into_iter().collect()
}
