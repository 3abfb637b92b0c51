//! Workflow Integration Tests
//!
//! PredictionWorkflow をスタブサーバーと一時ディレクトリで動かす統合テスト

mod common;

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use biascast::adapter::chart::SvgChartBackend;
use biascast::adapter::config::Config;
use biascast::adapter::http::HttpPredictionGateway;
use biascast::adapter::repositories::file_artifact_repository::FileArtifactRepository;
use biascast::application::presenter::WorkflowPresenter;
use biascast::domain::entities::csv_upload::CsvUpload;
use biascast::domain::entities::download_artifact::ArtifactHandle;
use biascast::domain::entities::upload_status::UploadStatus;
use biascast::domain::errors::WorkflowError;
use biascast::domain::services::result_formatter::TableRow;
use biascast::driver::cli::Args;
use biascast::driver::workflow::{DefaultWorkflow, PredictionWorkflow};
use clap::Parser;
use common::{refused_base_url, StubServer};
use tempfile::TempDir;

/// N件の予測レスポンスを作る
fn predictions_body(n: usize) -> String {
    let items: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"ts":"2024-01-01 {:02}:{:02}:00","pred":{}}}"#,
                i / 60,
                i % 60,
                (i as f64) * 0.125
            )
        })
        .collect();
    format!(
        r#"{{"predictions":[{}],"n_predictions":{}}}"#,
        items.join(","),
        n
    )
}

fn config(base_url: &str, out_dir: &Path) -> Config {
    Config {
        base_url: base_url.to_string(),
        output_dir: out_dir.display().to_string(),
        request_timeout_secs: 10,
        ..Config::default()
    }
}

fn upload() -> CsvUpload {
    CsvUpload::new(
        "bias.csv",
        b"timestamp,clock_bias\n2024-01-01 00:00:00,1.5e-8\n".to_vec(),
    )
}

/// ステータスだけを記録するPresenter
#[derive(Default)]
struct StatusLog {
    statuses: Mutex<Vec<UploadStatus>>,
}

impl WorkflowPresenter for StatusLog {
    fn show_status(&self, status: &UploadStatus) {
        self.statuses.lock().unwrap().push(status.clone());
    }
    fn alert(&self, _message: &str) {}
    fn show_table(&self, _rows: &[TableRow]) {}
    fn show_download(&self, _handle: &ArtifactHandle) {}
    fn show_chart(&self, _location: &str) {}
}

#[tokio::test]
async fn test_submit_writes_csv_and_chart() {
    let server = StubServer::start(200, &predictions_body(30)).await;
    let out = TempDir::new().unwrap();
    let mut workflow = DefaultWorkflow::from_config(&config(&server.base_url(), out.path())).unwrap();

    let summary = workflow.submit(Some(upload())).await.unwrap();

    assert_eq!(summary.total_rows, 30);
    assert_eq!(summary.preview_rows, 20);

    let csv = fs::read_to_string(out.path().join("predictions.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 31);
    assert_eq!(lines[0], "index,timestamp,prediction");
    assert_eq!(lines[1], "1,2024-01-01 00:00:00,0.0000000000000000e+0");
    assert_eq!(lines[2], "2,2024-01-01 00:01:00,1.2500000000000000e-1");

    let svg = fs::read_to_string(out.path().join("predictions.svg")).unwrap();
    assert!(svg.contains("Predicted Clock Bias (seconds)"));
}

#[tokio::test]
async fn test_resubmit_replaces_outputs() {
    let server = StubServer::start(200, &predictions_body(3)).await;
    let out = TempDir::new().unwrap();
    let mut workflow = DefaultWorkflow::from_config(&config(&server.base_url(), out.path())).unwrap();

    let first = workflow.submit(Some(upload())).await.unwrap();
    let second = workflow.submit(Some(upload())).await.unwrap();

    assert_ne!(first.download.id, second.download.id);
    assert_eq!(first.download.location, second.download.location);
    let csv = fs::read_to_string(out.path().join("predictions.csv")).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(out.path().join("predictions.svg").exists());
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn test_no_file_selected_sends_nothing() {
    let server = StubServer::start(200, &predictions_body(1)).await;
    let out = TempDir::new().unwrap();
    let mut workflow = DefaultWorkflow::from_config(&config(&server.base_url(), out.path())).unwrap();

    let result = workflow.submit(None).await;

    assert!(matches!(result, Err(WorkflowError::NoFileSelected)));
    assert!(server.requests().is_empty());
    assert!(!out.path().join("predictions.csv").exists());
}

#[tokio::test]
async fn test_http_error_status_shows_body() {
    let server = StubServer::start(500, "Model not loaded").await;
    let out = TempDir::new().unwrap();
    let log = Arc::new(StatusLog::default());
    let config = config(&server.base_url(), out.path());
    let mut workflow = PredictionWorkflow::new(
        Arc::new(HttpPredictionGateway::from_config(&config).unwrap()),
        Arc::new(FileArtifactRepository::new(out.path())),
        Arc::new(SvgChartBackend::new(config.chart_path())),
        log.clone(),
        config.to_workflow_config(),
    );

    let result = workflow.submit(Some(upload())).await;

    assert!(matches!(
        result,
        Err(WorkflowError::HttpError { status: 500, .. })
    ));
    let statuses = log.statuses.lock().unwrap().clone();
    assert_eq!(
        statuses.last().map(|s| s.to_string()),
        Some("Error: Model not loaded".to_string())
    );
    assert!(!out.path().join("predictions.csv").exists());
}

#[tokio::test]
async fn test_slow_response_shows_warm_up_before_result() {
    let server =
        StubServer::start_delayed(200, &predictions_body(2), Duration::from_millis(800)).await;
    let out = TempDir::new().unwrap();
    let log = Arc::new(StatusLog::default());
    let mut config = config(&server.base_url(), out.path());
    config.cold_start_ms = 100;
    let mut workflow = PredictionWorkflow::new(
        Arc::new(HttpPredictionGateway::from_config(&config).unwrap()),
        Arc::new(FileArtifactRepository::new(out.path())),
        Arc::new(SvgChartBackend::new(config.chart_path())),
        log.clone(),
        config.to_workflow_config(),
    );

    workflow.submit(Some(upload())).await.unwrap();

    let statuses = log.statuses.lock().unwrap().clone();
    let warm = statuses
        .iter()
        .position(|s| *s == UploadStatus::WarmingUp)
        .unwrap();
    assert_eq!(statuses.last(), Some(&UploadStatus::Complete));
    assert!(warm < statuses.len() - 1);
    assert_eq!(
        statuses.iter().filter(|s| **s == UploadStatus::WarmingUp).count(),
        1
    );
}

#[tokio::test]
async fn test_unreachable_service_asks_for_retry() {
    let base_url = refused_base_url().await;
    let out = TempDir::new().unwrap();
    let log = Arc::new(StatusLog::default());
    let config = config(&base_url, out.path());
    let mut workflow = PredictionWorkflow::new(
        Arc::new(HttpPredictionGateway::from_config(&config).unwrap()),
        Arc::new(FileArtifactRepository::new(out.path())),
        Arc::new(SvgChartBackend::new(config.chart_path())),
        log.clone(),
        config.to_workflow_config(),
    );

    let result = workflow.submit(Some(upload())).await;

    assert!(matches!(result, Err(WorkflowError::NetworkError(_))));
    assert_eq!(
        log.statuses.lock().unwrap().last(),
        Some(&UploadStatus::WokeUpRetry)
    );
}

#[tokio::test]
async fn test_execute_fails_when_a_submission_fails() {
    let server = StubServer::start(500, "boom").await;
    let out = TempDir::new().unwrap();
    let csv_path = out.path().join("bias.csv");
    fs::write(&csv_path, "timestamp,clock_bias\n").unwrap();
    let mut workflow = DefaultWorkflow::from_config(&config(&server.base_url(), out.path())).unwrap();
    let args = Args::parse_from(["biascast", csv_path.to_str().unwrap()]);

    let result = workflow.execute(args).await;

    assert!(result.is_err());
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_execute_ping() {
    let server = StubServer::start(200, r#"{"status":"ok"}"#).await;
    let out = TempDir::new().unwrap();
    let mut workflow = DefaultWorkflow::from_config(&config(&server.base_url(), out.path())).unwrap();
    let args = Args::parse_from(["biascast", "--ping"]);

    workflow.execute(args).await.unwrap();

    assert_eq!(server.requests()[0].request_line(), "GET / HTTP/1.1");
}
