// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 将一个单词展开为候选路径
///
/// 第一个候选是基础形式：不含 `.` 的单词按目录处理（`/word/`），
/// 含 `.` 的按文件处理（`/word`）。之后每个扩展名生成一个 `/word{ext}`，
/// 扩展名原样拼接，不插入任何分隔符。
pub fn expand(word: &str, extensions: &[String]) -> Vec<String> {
    let mut candidates = Vec::with_capacity(1 + extensions.len());

    if word.contains('.') {
        candidates.push(format!("/{}", word));
    } else {
        candidates.push(format!("/{}/", word));
    }

    for ext in extensions {
        candidates.push(format!("/{}{}", word, ext));
    }

    candidates
}
