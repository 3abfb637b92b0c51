//! # UploadStatus Value Object
//!
//! ステータス表示に出すアップロード状態

use std::fmt;

/// アップロード状態
///
/// ステータスエリアに表示される人間向けの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    Idle,
    /// 送信中（パーセント）
    Uploading(u8),
    /// コールドスタート待ち
    WarmingUp,
    Complete,
    /// エラー（メッセージはそのまま表示）
    Error(String),
    /// 通信失敗。サーバーが起動直後の可能性があるため再試行を促す
    WokeUpRetry,
}

impl UploadStatus {
    /// 送信の終端状態かどうか
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            UploadStatus::Complete | UploadStatus::Error(_) | UploadStatus::WokeUpRetry
        )
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadStatus::Idle => write!(f, "Idle"),
            UploadStatus::Uploading(percent) => write!(f, "Uploading... {}%", percent),
            UploadStatus::WarmingUp => {
                write!(f, "Server is warming up (cold start), please wait...")
            }
            UploadStatus::Complete => write!(f, "Processing complete."),
            UploadStatus::Error(message) => write!(f, "Error: {}", message),
            UploadStatus::WokeUpRetry => {
                write!(f, "Server may have just woken up. Please retry the upload.")
            }
        }
    }
}
