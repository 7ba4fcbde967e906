// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::config::settings::ScanSettings;
use crate::utils::errors::ScanError;
use crate::utils::url_utils;

/// 扫描运行配置
///
/// 启动时构建一次，之后以只读方式在所有工作者之间共享
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// 目标地址（已补全协议）
    pub targets: Vec<Url>,
    /// 字典文件路径
    pub word_list: PathBuf,
    /// 每个目标的工作者数量
    pub max_threads: usize,
    /// 扩展名列表，按原样拼接在单词之后
    pub extensions: Vec<String>,
    /// 单个请求超时时间
    pub timeout: Duration,
    /// 断点续扫标记
    pub resume: Option<String>,
    /// 是否实时输出非200结果
    pub show_all: bool,
    /// User-Agent
    pub user_agent: String,
}

impl ScanConfig {
    /// 由配置和命令行输入构建扫描配置
    ///
    /// # 参数
    ///
    /// * `settings` - 已加载的扫描配置
    /// * `targets` - 原始目标地址
    /// * `word_list` - 字典文件路径
    /// * `resume` - 断点续扫标记
    pub fn resolve(
        settings: &ScanSettings,
        targets: &[String],
        word_list: PathBuf,
        resume: Option<String>,
    ) -> Result<Self, ScanError> {
        if targets.is_empty() {
            return Err(ScanError::InvalidConfig("at least one target is required".into()));
        }
        if settings.max_threads == 0 {
            return Err(ScanError::InvalidConfig("max_threads must be at least 1".into()));
        }
        if settings.timeout_secs == 0 {
            return Err(ScanError::InvalidConfig("timeout must be at least 1 second".into()));
        }

        let targets = targets
            .iter()
            .map(|t| {
                url_utils::parse_target(t).map_err(|source| ScanError::InvalidTarget {
                    target: t.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            targets,
            word_list,
            max_threads: settings.max_threads,
            extensions: settings.extensions.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
            resume,
            show_all: settings.show_all,
            user_agent: settings.user_agent.clone(),
        })
    }
}
