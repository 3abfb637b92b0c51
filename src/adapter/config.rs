//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use log::info;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::dto::workflow_config::WorkflowConfig;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// 予測サービスのベースURL（デプロイ先ごとに差し替える）
    pub base_url: String,
    /// 予測エンドポイントのパス
    pub predict_path: String,

    pub cold_start_ms: u64,
    pub preview_rows: usize,

    // Output
    pub output_dir: String,
    pub chart_file: String,

    // HTTP
    pub request_timeout_secs: u64,
    pub upload_chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            predict_path: "predict".to_string(),
            cold_start_ms: 3000,
            preview_rows: 20,
            output_dir: ".".to_string(),
            chart_file: "predictions.svg".to_string(),
            request_timeout_secs: 300,
            upload_chunk_size: 64 * 1024,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// 設定ファイルがなければ既定値を使う
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!("No config file at {}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    fn base(&self) -> Result<Url> {
        // join() がパスの最後のセグメントを置き換えないよう末尾を '/' にする
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let url = Url::parse(&base).with_context(|| format!("Invalid base_url: {}", self.base_url))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("base_url must be an absolute http(s) URL: {}", self.base_url);
        }
        Ok(url)
    }

    /// 予測エンドポイントの絶対URL
    pub fn predict_url(&self) -> Result<Url> {
        self.base()?
            .join(self.predict_path.trim_start_matches('/'))
            .with_context(|| format!("Invalid predict_path: {}", self.predict_path))
    }

    /// ヘルスチェック用のURL（サービスのルート）
    pub fn health_url(&self) -> Result<Url> {
        self.base()
    }

    pub fn chart_path(&self) -> PathBuf {
        Path::new(&self.output_dir).join(&self.chart_file)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn to_workflow_config(&self) -> WorkflowConfig {
        WorkflowConfig::new(Duration::from_millis(self.cold_start_ms), self.preview_rows)
    }
}
