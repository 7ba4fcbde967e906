// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::models::probe::ProbeResult;

/// 按状态码分组的扫描结果
///
/// 序列化为JSON时状态码作为字符串键，值为 请求地址 -> 最终地址 的映射
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    buckets: BTreeMap<u16, BTreeMap<String, String>>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 将一条探测结果并入对应状态码的分组
    pub fn insert(&mut self, result: ProbeResult) {
        self.buckets
            .entry(result.status_code)
            .or_default()
            .insert(result.requested_url, result.resolved_url);
    }

    pub fn get(&self, status_code: u16) -> Option<&BTreeMap<String, String>> {
        self.buckets.get(&status_code)
    }

    pub fn status_codes(&self) -> impl Iterator<Item = u16> + '_ {
        self.buckets.keys().copied()
    }

    /// 所有分组中的条目总数
    pub fn len(&self) -> usize {
        self.buckets.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// 每个状态码对应的条目数
    pub fn summary(&self) -> Vec<(u16, usize)> {
        self.buckets
            .iter()
            .map(|(code, entries)| (*code, entries.len()))
            .collect()
    }
}

impl FromIterator<ProbeResult> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ProbeResult>>(iter: I) -> Self {
        let mut set = ResultSet::new();
        for result in iter {
            set.insert(result);
        }
        set
    }
}
