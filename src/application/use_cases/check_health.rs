//! # Check Health Use Case
//!
//! 予測サービスのルートにGETを送り、稼働状況を確認する

use log::{info, warn};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::presenter::WorkflowPresenter;
use crate::domain::entities::upload_status::UploadStatus;
use crate::domain::errors::WorkflowError;
use crate::domain::repositories::prediction_gateway::PredictionGateway;

/// サービスのヘルスレスポンス
#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
}

/// ヘルスチェックユースケース
///
/// 眠っているインスタンスを起こす用途にも使う
pub struct CheckHealthUseCase<G: PredictionGateway> {
    gateway: Arc<G>,
}

impl<G: PredictionGateway> CheckHealthUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// ヘルスチェックを実行
    ///
    /// # Returns
    ///
    /// `{"status": ...}` の値、それ以外のボディはそのまま
    pub async fn execute(&self, presenter: &dyn WorkflowPresenter) -> Result<String, WorkflowError> {
        let reply = match self.gateway.health().await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Health check did not complete: {}", e);
                presenter.show_status(&UploadStatus::WokeUpRetry);
                return Err(WorkflowError::NetworkError(e));
            }
        };

        if !reply.is_ok() {
            presenter.show_status(&UploadStatus::Error(reply.body.clone()));
            return Err(WorkflowError::HttpError {
                status: reply.status,
                body: reply.body,
            });
        }

        let status = serde_json::from_str::<HealthBody>(&reply.body)
            .map(|b| b.status)
            .unwrap_or(reply.body);
        info!("Service status: {}", status);
        Ok(status)
    }
}
