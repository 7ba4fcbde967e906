// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::settings::LogSettings;

/// 初始化日志
///
/// `RUST_LOG` 优先于配置中的日志级别
pub fn init_telemetry(settings: &LogSettings) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(&settings.level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(settings.ansi),
        )
        .init();
}

fn default_directive(level: &str) -> String {
    format!("warn,dirprobe={}", level)
}
