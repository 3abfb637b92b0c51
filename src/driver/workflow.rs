//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{bail, Context, Result};
use log::{info, warn};
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::Path;
use std::sync::Arc;
use std::thread;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::adapter::chart::SvgChartBackend;
use crate::adapter::config::Config;
use crate::adapter::console::ConsolePresenter;
use crate::adapter::http::HttpPredictionGateway;
use crate::adapter::repositories::file_artifact_repository::FileArtifactRepository;
use crate::application::dto::workflow_config::WorkflowConfig;
use crate::application::presenter::WorkflowPresenter;
use crate::application::use_cases::check_health::CheckHealthUseCase;
use crate::application::use_cases::render_results::{RenderResultsUseCase, RenderSummary};
use crate::application::use_cases::submit_prediction::SubmitPredictionUseCase;
use crate::domain::entities::csv_upload::CsvUpload;
use crate::domain::entities::upload_status::UploadStatus;
use crate::domain::errors::WorkflowError;
use crate::domain::repositories::artifact_repository::ArtifactRepository;
use crate::domain::repositories::chart_backend::ChartBackend;
use crate::domain::repositories::prediction_gateway::PredictionGateway;

use super::cli::Args;

/// 実際のアダプタで組み立てたワークフロー
pub type DefaultWorkflow =
    PredictionWorkflow<HttpPredictionGateway, FileArtifactRepository, SvgChartBackend>;

/// CSVファイルをアップロード用に読み込む
pub async fn read_upload(path: &Path) -> Result<CsvUpload> {
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    Ok(CsvUpload::new(file_name, content))
}

/// 専用スレッドで行を読み、チャネルに流す
///
/// ブロッキング読み込みをランタイムの外に置くため、中断時に入力待ちで止まらない
pub fn spawn_line_reader<R>(reader: R) -> Result<mpsc::Receiver<io::Result<String>>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
        })
        .context("Failed to spawn stdin reader thread")?;
    Ok(rx)
}

/// Prediction Workflow
///
/// `submit` は `&mut self` を取るため、送信は1件ずつ順に処理される
pub struct PredictionWorkflow<G: PredictionGateway, A: ArtifactRepository, B: ChartBackend> {
    submit_use_case: SubmitPredictionUseCase<G>,
    render_use_case: RenderResultsUseCase<A, B>,
    health_use_case: CheckHealthUseCase<G>,
    presenter: Arc<dyn WorkflowPresenter>,
    abort: CancellationToken,
}

impl<G, A, B> PredictionWorkflow<G, A, B>
where
    G: PredictionGateway,
    A: ArtifactRepository,
    B: ChartBackend,
{
    /// Create a new workflow instance with dependency injection
    pub fn new(
        gateway: Arc<G>,
        artifact_repository: Arc<A>,
        chart_backend: Arc<B>,
        presenter: Arc<dyn WorkflowPresenter>,
        config: WorkflowConfig,
    ) -> Self {
        Self {
            submit_use_case: SubmitPredictionUseCase::new(gateway.clone(), config.cold_start_delay),
            render_use_case: RenderResultsUseCase::new(
                artifact_repository,
                chart_backend,
                config.preview_rows,
            ),
            health_use_case: CheckHealthUseCase::new(gateway),
            presenter,
            abort: CancellationToken::new(),
        }
    }

    /// 実行中の送信を中断するためのトークン
    pub fn abort_handle(&self) -> CancellationToken {
        self.abort.clone()
    }

    /// 1件の送信を終端結果まで処理する
    pub async fn submit(&mut self, upload: Option<CsvUpload>) -> Result<RenderSummary, WorkflowError> {
        let response = self
            .submit_use_case
            .execute(upload.as_ref(), self.presenter.as_ref(), &self.abort)
            .await?;

        match self
            .render_use_case
            .execute(&response.predictions, self.presenter.as_ref())
            .await
        {
            Ok(summary) => Ok(summary),
            Err(e) => {
                self.presenter
                    .show_status(&UploadStatus::Error(format!("{:#}", e)));
                Err(WorkflowError::Render(e))
            }
        }
    }

    /// サービスの稼働確認
    pub async fn ping(&self) -> Result<String, WorkflowError> {
        self.health_use_case.execute(self.presenter.as_ref()).await
    }

    /// Execute the workflow for the given arguments
    pub async fn execute(&mut self, args: Args) -> Result<()> {
        let abort = self.abort.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, aborting the in-flight upload");
                abort.cancel();
            }
        });

        if args.ping {
            let status = self.ping().await?;
            println!("✓ Service status: {}", status);
            return Ok(());
        }

        let failed = if args.files.is_empty() {
            self.run_interactive().await?
        } else {
            self.run_files(&args.files).await
        };

        if self.abort.is_cancelled() {
            bail!("Interrupted");
        }
        if failed > 0 {
            bail!("{} submission(s) failed", failed);
        }
        Ok(())
    }

    /// 指定されたファイルを順に送信し、失敗件数を返す
    pub async fn run_files(&mut self, files: &[impl AsRef<Path>]) -> usize {
        let mut failed = 0;
        for path in files {
            if self.abort.is_cancelled() {
                break;
            }
            if !self.submit_path(Some(path.as_ref())).await {
                failed += 1;
            }
        }
        failed
    }

    /// 標準入力からパスを読み、1行ごとに送信する（空行はファイル未選択）
    async fn run_interactive(&mut self) -> Result<usize> {
        let interactive = io::stdin().is_terminal();
        let mut lines = spawn_line_reader(BufReader::new(io::stdin()))?;
        let mut failed = 0;

        loop {
            if interactive {
                println!("CSV file to upload (empty line: none, Ctrl-D: quit):");
            }
            let line = tokio::select! {
                line = lines.recv() => line.transpose().context("Failed to read stdin")?,
                _ = self.abort.cancelled() => None,
            };
            let Some(line) = line else { break };

            let trimmed = line.trim();
            let ok = if trimmed.is_empty() {
                self.submit_path(None).await
            } else {
                let expanded = shellexpand::tilde(trimmed).to_string();
                self.submit_path(Some(Path::new(&expanded))).await
            };
            if !ok {
                failed += 1;
            }
        }
        Ok(failed)
    }

    /// パスを読み込んで送信し、成功したかどうかを返す
    async fn submit_path(&mut self, path: Option<&Path>) -> bool {
        let upload = match path {
            Some(path) => match read_upload(path).await {
                Ok(upload) => Some(upload),
                Err(e) => {
                    self.presenter.alert(&format!("{:#}", e));
                    return false;
                }
            },
            None => None,
        };

        match self.submit(upload).await {
            Ok(summary) => {
                println!(
                    "✓ {} predictions ({} shown in preview)",
                    summary.total_rows, summary.preview_rows
                );
                true
            }
            Err(e) => {
                warn!("Submission failed: {}", e);
                if e.is_retryable() {
                    info!("The service may still be starting; retrying the same file can help");
                }
                false
            }
        }
    }
}

impl DefaultWorkflow {
    /// 設定から実際のアダプタを組み立てる
    pub fn from_config(config: &Config) -> Result<Self> {
        let gateway = Arc::new(HttpPredictionGateway::from_config(config)?);
        let artifacts = Arc::new(FileArtifactRepository::new(&config.output_dir));
        let chart_backend = Arc::new(SvgChartBackend::new(config.chart_path()));

        println!("✓ Using configuration:");
        println!("  Endpoint: {}", gateway.predict_url());
        println!("  Output: {}", config.output_dir);

        Ok(Self::new(
            gateway,
            artifacts,
            chart_backend,
            Arc::new(ConsolePresenter::new()),
            config.to_workflow_config(),
        ))
    }
}
