//! Biascast - Clock Bias Prediction Client
//!
//! 時計バイアスのCSVを予測サービスに送信し、結果をCSVとチャートに書き出す

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use biascast::adapter::config::Config;
use biascast::driver::{Args, DefaultWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration, then let flags override it
    let mut config = Config::load_or_default(&args.config)?;
    args.apply_to(&mut config);

    // Create workflow with injected dependencies
    let mut workflow = DefaultWorkflow::from_config(&config)?;

    workflow.execute(args).await
}
