//! # Render Results Use Case
//!
//! 予測結果をテーブルプレビュー・ダウンロードCSV・チャートとして出力するユースケース

use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;

use crate::application::presenter::WorkflowPresenter;
use crate::application::services::chart_renderer::ChartRenderer;
use crate::domain::entities::chart_spec::LineChartSpec;
use crate::domain::entities::download_artifact::{ArtifactHandle, DownloadArtifact};
use crate::domain::entities::prediction::PredictionPoint;
use crate::domain::repositories::artifact_repository::ArtifactRepository;
use crate::domain::repositories::chart_backend::ChartBackend;
use crate::domain::services::result_formatter::ResultFormatter;

/// 出力結果のサマリー
#[derive(Debug, Clone)]
pub struct RenderSummary {
    /// プレビューに表示した行数
    pub preview_rows: usize,
    /// CSVに書き出した行数（ヘッダーを除く）
    pub total_rows: usize,
    pub download: ArtifactHandle,
    pub chart_location: String,
}

/// 結果出力ユースケース
///
/// ダウンロードハンドルとチャートインスタンスを保持し、
/// 次の出力の前に以前のものを解放する
pub struct RenderResultsUseCase<A: ArtifactRepository, B: ChartBackend> {
    artifact_repository: Arc<A>,
    chart: ChartRenderer<B>,
    preview_rows: usize,
    current_download: Option<ArtifactHandle>,
}

impl<A: ArtifactRepository, B: ChartBackend> RenderResultsUseCase<A, B> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `artifact_repository` - ダウンロードCSVの公開先
    /// * `chart_backend` - チャートバックエンド
    /// * `preview_rows` - テーブルプレビューの最大行数
    pub fn new(artifact_repository: Arc<A>, chart_backend: Arc<B>, preview_rows: usize) -> Self {
        Self {
            artifact_repository,
            chart: ChartRenderer::new(chart_backend),
            preview_rows,
            current_download: None,
        }
    }

    /// 予測結果を出力
    ///
    /// # Arguments
    ///
    /// * `predictions` - 受信順の予測
    /// * `presenter` - 表示先
    ///
    /// # Errors
    ///
    /// CSVの公開またはチャートの生成に失敗した場合にエラーを返す
    pub async fn execute(
        &mut self,
        predictions: &[PredictionPoint],
        presenter: &dyn WorkflowPresenter,
    ) -> Result<RenderSummary> {
        let rows = ResultFormatter::preview(predictions, self.preview_rows);
        presenter.show_table(&rows);

        let artifact = DownloadArtifact::predictions_csv(ResultFormatter::to_csv(predictions));
        self.release_download().await;
        let download = self
            .artifact_repository
            .publish(&artifact)
            .await
            .with_context(|| format!("Failed to publish {}", artifact.file_name))?;
        presenter.show_download(&download);
        self.current_download = Some(download.clone());

        let spec = LineChartSpec::clock_bias(predictions);
        let chart_location = self.chart.render(&spec)?.to_string();
        presenter.show_chart(&chart_location);

        info!(
            "Rendered {} predictions ({} in preview)",
            predictions.len(),
            rows.len()
        );

        Ok(RenderSummary {
            preview_rows: rows.len(),
            total_rows: predictions.len(),
            download,
            chart_location,
        })
    }

    /// 現在のダウンロードハンドル
    pub fn current_download(&self) -> Option<&ArtifactHandle> {
        self.current_download.as_ref()
    }

    /// 以前のダウンロードを解放（失敗しても出力は続ける）
    async fn release_download(&mut self) {
        if let Some(previous) = self.current_download.take() {
            if let Err(e) = self.artifact_repository.release(&previous).await {
                warn!(
                    "Failed to release previous download {}: {:#}",
                    previous.location, e
                );
            }
        }
    }
}
