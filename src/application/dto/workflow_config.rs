//! # Workflow Configuration DTO
//!
//! 送信ワークフローの設定のData Transfer Object

use std::time::Duration;

use crate::application::services::cold_start::DEFAULT_COLD_START_DELAY;
use crate::domain::services::result_formatter::DEFAULT_PREVIEW_ROWS;

/// ワークフロー設定
///
/// ユースケースが必要とする設定値（エンドポイントはゲートウェイ側が持つ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowConfig {
    /// レスポンスがこの時間内に来なければウォームアップ中と表示する
    pub cold_start_delay: Duration,
    /// テーブルプレビューの最大行数
    pub preview_rows: usize,
}

impl WorkflowConfig {
    /// 新しいワークフロー設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use std::time::Duration;
    /// use biascast::application::dto::workflow_config::WorkflowConfig;
    ///
    /// let config = WorkflowConfig::new(Duration::from_millis(5000), 50);
    ///
    /// assert_eq!(config.cold_start_delay, Duration::from_secs(5));
    /// assert_eq!(config.preview_rows, 50);
    /// ```
    pub fn new(cold_start_delay: Duration, preview_rows: usize) -> Self {
        Self {
            cold_start_delay,
            preview_rows,
        }
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COLD_START_DELAY, DEFAULT_PREVIEW_ROWS)
    }
}
