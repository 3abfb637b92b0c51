//! # Prediction Gateway Trait
//!
//! 予測サービスとのHTTP通信を抽象化

use async_trait::async_trait;
use tokio::sync::mpsc;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::csv_upload::CsvUpload;
use crate::domain::entities::upload_progress::UploadProgress;
use crate::domain::errors::TransportError;

/// 進捗イベントの送信側
///
/// ボディ送信中に0回以上送られ、リクエスト完了時にドロップされる
pub type ProgressSender = mpsc::UnboundedSender<UploadProgress>;

/// HTTPレスポンス（ステータスとボディ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// ステータスが200かどうか
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// 予測ゲートウェイ
///
/// HTTPレスポンスを受け取れた場合はステータスに関わらず `Ok` を返し、
/// レスポンスを受け取れなかった場合のみ `TransportError` を返す
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PredictionGateway: Send + Sync {
    /// CSVファイルをmultipartで予測エンドポイントへ送信
    ///
    /// # Arguments
    ///
    /// * `upload` - 送信するファイル
    /// * `progress` - 送信進捗の通知先
    async fn upload(
        &self,
        upload: &CsvUpload,
        progress: ProgressSender,
    ) -> Result<HttpReply, TransportError>;

    /// サービスのヘルスチェック
    async fn health(&self) -> Result<HttpReply, TransportError>;
}
