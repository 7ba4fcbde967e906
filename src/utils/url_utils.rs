// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 为缺少协议的目标补全 `http://`
pub fn normalize_target(target: &str) -> String {
    if target.starts_with("http://") || target.starts_with("https://") {
        target.to_string()
    } else {
        format!("http://{}", target)
    }
}

/// 解析目标地址，缺省协议时按 `http://` 处理
pub fn parse_target(target: &str) -> Result<Url, ParseError> {
    Url::parse(&normalize_target(target))
}

/// 将候选路径解析到目标地址上
///
/// 以 `/` 开头的路径会替换目标原有的路径部分。
/// 空单词展开得到的 `//` 没有主机名，解析为目标地址本身。
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    if path == "//" {
        return Ok(base_url.clone());
    }
    base_url.join(path)
}
