//! Console Presenter
//!
//! WorkflowPresenterのターミナル実装

use log::debug;
use std::sync::Mutex;

use crate::application::presenter::WorkflowPresenter;
use crate::domain::entities::download_artifact::ArtifactHandle;
use crate::domain::entities::upload_status::UploadStatus;
use crate::domain::services::result_formatter::TableRow;

const TABLE_HEADERS: [&str; 3] = ["#", "Timestamp", "Prediction"];

/// ターミナルに出力するPresenter
///
/// 同じステータス行が続く場合は1回だけ表示する
#[derive(Default)]
pub struct ConsolePresenter {
    last_status: Mutex<Option<String>>,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// ステータスに付けるマーカー
    fn marker(status: &UploadStatus) -> &'static str {
        match status {
            UploadStatus::Complete => "✓",
            UploadStatus::Error(_) => "✗",
            UploadStatus::WokeUpRetry | UploadStatus::WarmingUp => "⚠",
            UploadStatus::Idle | UploadStatus::Uploading(_) => "…",
        }
    }
}

/// プレビュー行を列揃えしたテキストにする
pub fn format_table(rows: &[TableRow]) -> String {
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|r| [r.index.to_string(), r.timestamp.clone(), r.prediction.clone()])
        .collect();

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |row: [&str; 3]| {
        format!(
            "{:>w0$}  {:<w1$}  {:>w2$}",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        )
        .trim_end()
        .to_string()
    };

    let mut lines = vec![render(TABLE_HEADERS)];
    lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    lines.extend(
        cells
            .iter()
            .map(|c| render([c[0].as_str(), c[1].as_str(), c[2].as_str()])),
    );
    lines.join("\n")
}

impl WorkflowPresenter for ConsolePresenter {
    fn show_status(&self, status: &UploadStatus) {
        let line = status.to_string();
        let mut last = self.last_status.lock().unwrap_or_else(|e| e.into_inner());
        if last.as_deref() == Some(line.as_str()) {
            return;
        }
        debug!("Status: {:?}", status);
        println!("{} {}", Self::marker(status), line);

        // 次の送信の最初のステータスを抑制しない
        *last = if status.is_terminal() { None } else { Some(line) };
    }

    fn alert(&self, message: &str) {
        eprintln!("⚠ {}", message);
    }

    fn show_table(&self, rows: &[TableRow]) {
        println!("Preview (first {} rows):", rows.len());
        println!("{}", format_table(rows));
    }

    fn show_download(&self, handle: &ArtifactHandle) {
        println!("✓ Download ready: {}", handle.location);
    }

    fn show_chart(&self, location: &str) {
        println!("✓ Chart saved: {}", location);
    }
}
