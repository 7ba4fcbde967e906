// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::models::result_set::ResultSet;
use crate::utils::errors::ScanError;
use crate::utils::url_utils;

/// 推导默认的结果文件路径
///
/// 格式为 `{dir}/{首个目标的主机名}.{YYYYmmdd-HHMMSS}.json`
pub fn default_output_path(dir: &Path, first_target: &str, now: DateTime<Local>) -> PathBuf {
    let host = url_utils::parse_target(first_target)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| first_target.to_string());

    dir.join(format!("{}.{}.json", host, now.format("%Y%m%d-%H%M%S")))
}

/// 将结果集写入JSON文件
///
/// 文件不存在时创建，存在时覆盖
pub async fn write_results(path: &Path, results: &ResultSet) -> Result<(), ScanError> {
    let data = serde_json::to_vec_pretty(results)?;

    fs::write(path, data).await.map_err(|source| ScanError::Output {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "Results written");
    Ok(())
}

/// 从JSON文件读取结果集
pub async fn read_results(path: &Path) -> Result<ResultSet, ScanError> {
    let data = fs::read(path).await.map_err(|source| ScanError::Output {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_slice(&data)?)
}
