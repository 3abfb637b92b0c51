//! # Workflow Errors
//!
//! 1回の送信を終端させるエラーの分類
//!
//! どのエラーもその送信だけを終わらせ、ワークフロー自体は次の送信に使える

use thiserror::Error;

/// トランスポート層の失敗（HTTPレスポンスを受け取れなかった）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("request aborted")]
    Aborted,
    #[error("request failed: {0}")]
    Request(String),
}

/// 送信ワークフローのエラー
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// ファイル未選択。ネットワーク呼び出しは行わない
    #[error("no file selected")]
    NoFileSelected,

    /// 200以外のHTTPステータス。ボディはそのまま表示する
    #[error("server returned HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// 接続拒否・DNS失敗・中断など
    #[error("network error: {0}")]
    NetworkError(#[from] TransportError),

    /// 200だがボディが予測レスポンスとして読めない
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// 結果の出力（CSV・チャート）に失敗
    #[error("failed to render results: {0:#}")]
    Render(anyhow::Error),
}

impl WorkflowError {
    /// サーバー起動待ちの可能性があり、再試行で回復しうるかどうか
    ///
    /// HTTPレスポンスが返ってきた場合はサーバーが起きているので対象外
    pub fn is_retryable(&self) -> bool {
        matches!(self, WorkflowError::NetworkError(_))
    }
}
