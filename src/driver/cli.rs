//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;
use std::path::PathBuf;

use crate::adapter::config::Config;

/// CSVを予測サービスに送信し、結果をCSVとチャートに書き出すCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "biascast")]
#[command(
    about = "Upload clock-bias CSV files to the prediction service and render the results",
    long_about = None
)]
pub struct Args {
    /// CSV files to submit, one after another (reads paths from stdin when omitted)
    pub files: Vec<PathBuf>,

    /// Config file path (defaults are used when it does not exist)
    #[arg(short, long, default_value = "./biascast.json")]
    pub config: String,

    /// Base URL of the prediction service
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Directory for predictions.csv and the chart
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Milliseconds without a response before showing the warm-up notice
    #[arg(long)]
    pub cold_start_ms: Option<u64>,

    /// Only check that the service is up
    #[arg(long)]
    pub ping: bool,
}

impl Args {
    /// コマンドライン指定で設定を上書き
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.base_url = endpoint.clone();
        }
        if let Some(out_dir) = &self.out_dir {
            config.output_dir = out_dir.display().to_string();
        }
        if let Some(ms) = self.cold_start_ms {
            config.cold_start_ms = ms;
        }
    }
}
