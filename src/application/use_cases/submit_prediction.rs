//! # Submit Prediction Use Case
//!
//! CSVファイルを予測サービスへ送信し、レスポンスを解釈するユースケース

use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::application::presenter::WorkflowPresenter;
use crate::application::services::cold_start::ColdStartTimer;
use crate::domain::entities::csv_upload::CsvUpload;
use crate::domain::entities::prediction::PredictionResponse;
use crate::domain::entities::upload_status::UploadStatus;
use crate::domain::errors::{TransportError, WorkflowError};
use crate::domain::repositories::prediction_gateway::{HttpReply, PredictionGateway};

/// ファイル未選択時のアラート文言
pub const NO_FILE_ALERT: &str = "Please select a CSV file.";

/// 予測送信ユースケース
///
/// 1回の送信につき、進捗は0回以上、終端結果はちょうど1回表示される。
/// コールドスタートの表示は終端結果より前にしか起こらない
pub struct SubmitPredictionUseCase<G: PredictionGateway> {
    gateway: Arc<G>,
    cold_start_delay: Duration,
}

impl<G: PredictionGateway> SubmitPredictionUseCase<G> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `gateway` - 予測ゲートウェイ
    /// * `cold_start_delay` - ウォームアップ表示までの待ち時間
    pub fn new(gateway: Arc<G>, cold_start_delay: Duration) -> Self {
        Self {
            gateway,
            cold_start_delay,
        }
    }

    /// ファイルを送信して予測レスポンスを返す
    ///
    /// # Arguments
    ///
    /// * `upload` - 選択されたファイル（未選択なら `None`）
    /// * `presenter` - ステータスとアラートの表示先
    /// * `abort` - 送信全体の中断トークン
    ///
    /// # Errors
    ///
    /// ファイル未選択、HTTPエラー、通信失敗、不正なレスポンスの場合にエラーを返す
    pub async fn execute(
        &self,
        upload: Option<&CsvUpload>,
        presenter: &dyn WorkflowPresenter,
        abort: &CancellationToken,
    ) -> Result<PredictionResponse, WorkflowError> {
        let Some(upload) = upload else {
            presenter.alert(NO_FILE_ALERT);
            return Err(WorkflowError::NoFileSelected);
        };

        info!(
            "Uploading {} ({} bytes)",
            upload.file_name(),
            upload.len()
        );
        presenter.show_status(&UploadStatus::Uploading(0));

        let (progress_tx, mut progress_rx) = mpsc::unbounded_channel();
        let timer = ColdStartTimer::start(abort, self.cold_start_delay);
        let cold_start = timer.elapsed();
        tokio::pin!(cold_start);
        let request = self.gateway.upload(upload, progress_tx);
        tokio::pin!(request);
        let mut timer_pending = true;

        let outcome = loop {
            tokio::select! {
                biased;
                reply = &mut request => break reply,
                _ = abort.cancelled() => break Err(TransportError::Aborted),
                fired = &mut cold_start, if timer_pending => {
                    timer_pending = false;
                    if fired {
                        info!("No response after {:?}, service is probably cold-starting", self.cold_start_delay);
                        presenter.show_status(&UploadStatus::WarmingUp);
                    }
                }
                Some(mut progress) = progress_rx.recv() => {
                    // 溜まっているイベントは最新のものだけ表示する
                    while let Ok(next) = progress_rx.try_recv() {
                        progress = next;
                    }
                    if let Some(percent) = progress.percent() {
                        debug!("Upload progress: {}/{:?} bytes", progress.sent, progress.total);
                        presenter.show_status(&UploadStatus::Uploading(percent));
                    }
                }
            }
        };
        timer.cancel();

        Self::interpret(outcome, presenter)
    }

    /// 終端結果をステータスとエラーに変換
    fn interpret(
        outcome: Result<HttpReply, TransportError>,
        presenter: &dyn WorkflowPresenter,
    ) -> Result<PredictionResponse, WorkflowError> {
        let reply = match outcome {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Prediction request did not complete: {}", e);
                presenter.show_status(&UploadStatus::WokeUpRetry);
                return Err(WorkflowError::NetworkError(e));
            }
        };

        if !reply.is_ok() {
            warn!("Prediction service returned HTTP {}", reply.status);
            presenter.show_status(&UploadStatus::Error(reply.body.clone()));
            return Err(WorkflowError::HttpError {
                status: reply.status,
                body: reply.body,
            });
        }

        match serde_json::from_str::<PredictionResponse>(&reply.body) {
            Ok(response) => {
                if response.count_mismatch() {
                    warn!(
                        "Service declared {:?} predictions but sent {}",
                        response.n_predictions,
                        response.len()
                    );
                }
                info!("Received {} predictions", response.len());
                presenter.show_status(&UploadStatus::Complete);
                Ok(response)
            }
            Err(e) => {
                warn!("Failed to parse prediction response: {}", e);
                presenter.show_status(&UploadStatus::Error(format!(
                    "Malformed response from server: {}",
                    e
                )));
                Err(WorkflowError::MalformedResponse(e.to_string()))
            }
        }
    }
}
