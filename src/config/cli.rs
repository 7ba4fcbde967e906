// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::Parser;
use std::path::PathBuf;

/// 基于字典的Web路径发现工具
#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirprobe",
    version,
    about = "Find web pages using a word list",
    after_help = "EXAMPLES:\n    \
        dirprobe --target example.com --word-list words.txt\n    \
        dirprobe --target https://a.example https://b.example --word-list words.txt --ext-list .php .bak\n    \
        dirprobe --target example.com --word-list words.txt --resume admin --outfile scan.json"
)]
pub struct CliArgs {
    /// Target URL(s), `http://` is assumed when no scheme is given
    #[arg(long = "target", required = true, num_args = 1.., value_name = "URL")]
    pub targets: Vec<String>,

    /// Word list file
    #[arg(long, value_name = "FILE")]
    pub word_list: PathBuf,

    /// Max concurrent workers per target
    #[arg(long, value_name = "NUM")]
    pub max_threads: Option<usize>,

    /// User agent sent with every request
    #[arg(long, value_name = "STRING")]
    pub ua: Option<String>,

    /// Suppress colors in output
    #[arg(long)]
    pub nocolor: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Extensions appended verbatim after each word
    #[arg(long, num_args = 0.., value_name = "EXT")]
    pub ext_list: Option<Vec<String>>,

    /// Show non-200 responses as they arrive
    #[arg(long)]
    pub showall: bool,

    /// Output file (default: ./{first target host}.{timestamp}.json)
    #[arg(long, value_name = "FILE")]
    pub outfile: Option<PathBuf>,

    /// Word from which to resume an interrupted scan
    #[arg(long, value_name = "WORD")]
    pub resume: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}
