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

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use dirprobe::config::cli::CliArgs;
use dirprobe::config::scan_config::ScanConfig;
use dirprobe::config::settings::Settings;
use dirprobe::engines::reqwest_engine::ReqwestEngine;
use dirprobe::engines::traits::ProbeEngine;
use dirprobe::infrastructure::storage;
use dirprobe::utils::telemetry;
use dirprobe::workers::{CancellationController, WorkerManager};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

/// 主函数
///
/// 解析参数、执行扫描并写出结果文件
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Parse arguments and load configuration
    let args = CliArgs::parse();
    let settings = Settings::with_cli(&args).context("Failed to load configuration")?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.log);
    info!("Starting dirprobe...");

    let config = Arc::new(ScanConfig::resolve(
        &settings.scan,
        &args.targets,
        args.word_list.clone(),
        args.resume.clone(),
    )?);

    let outfile = match args.outfile {
        Some(path) => path,
        None => storage::default_output_path(
            &std::env::current_dir().context("Failed to resolve working directory")?,
            &args.targets[0],
            Local::now(),
        ),
    };
    info!("Output file: {}", outfile.display());

    // 3. Shared HTTP engine
    let engine: Arc<dyn ProbeEngine> = Arc::new(
        ReqwestEngine::new(&config.user_agent, config.timeout)
            .context("Failed to build HTTP client")?,
    );

    // 4. Interrupt handling
    let cancellation = CancellationController::new();
    tokio::spawn(watch_interrupts(cancellation.clone()));

    // 5. Scan and persist
    let results = WorkerManager::scan(config, engine, cancellation).await?;
    storage::write_results(&outfile, &results).await?;
    info!("Results written successfully");

    Ok(())
}

/// 第一次中断请求停止扫描，第二次直接退出进程
async fn watch_interrupts(cancellation: CancellationController) {
    if let Err(err) = signal::ctrl_c().await {
        error!("Unable to listen for shutdown signal: {}", err);
        return;
    }

    warn!("Keyboard interrupt detected");
    info!("Gathering results, Ctrl+C again to force quit");
    cancellation.cancel();

    if signal::ctrl_c().await.is_ok() {
        warn!("Exiting");
        std::process::exit(130);
    }
}
