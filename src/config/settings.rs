// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::config::cli::CliArgs;

/// 应用程序配置设置
///
/// 包含扫描参数和日志输出两部分
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 扫描配置
    pub scan: ScanSettings,
    /// 日志配置
    pub log: LogSettings,
}

/// 扫描配置设置
#[derive(Debug, Deserialize)]
pub struct ScanSettings {
    /// 每个目标的并发工作者数量
    pub max_threads: usize,
    /// 单个请求超时时间（秒）
    pub timeout_secs: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 附加在每个单词后的扩展名
    pub extensions: Vec<String>,
    /// 是否实时输出非200的结果
    pub show_all: bool,
}

/// 日志配置设置
#[derive(Debug, Deserialize)]
pub struct LogSettings {
    /// 日志级别
    pub level: String,
    /// 是否输出ANSI颜色
    pub ansi: bool,
}

impl Settings {
    /// 加载配置并应用命令行参数
    ///
    /// 依次叠加默认值、配置文件、环境变量和命令行参数，
    /// 命令行参数的优先级最高
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn with_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        let builder = Self::base_builder()?
            .set_override_option("scan.max_threads", args.max_threads.map(|n| n as i64))?
            .set_override_option("scan.timeout_secs", args.timeout.map(|n| n as i64))?
            .set_override_option("scan.user_agent", args.ua.clone())?
            .set_override_option("scan.extensions", args.ext_list.clone())?
            .set_override_option("scan.show_all", args.showall.then_some(true))?
            .set_override_option("log.level", args.verbose.then_some("debug"))?
            .set_override_option("log.ansi", args.nocolor.then_some(false))?;

        builder.build()?.try_deserialize()
    }

    fn base_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let env = std::env::var("DIRPROBE_ENV").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("scan.max_threads", 5)?
            .set_default("scan.timeout_secs", 2)?
            .set_default("scan.user_agent", default_user_agent())?
            .set_default("scan.extensions", Vec::<String>::new())?
            .set_default("scan.show_all", false)?
            .set_default("log.level", "info")?
            .set_default("log.ansi", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("DIRPROBE")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("scan.extensions"),
            );

        Ok(builder)
    }
}

fn default_user_agent() -> String {
    format!("dirprobe/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
