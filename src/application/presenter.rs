//! # Workflow Presenter
//!
//! ステータスエリア・アラート・テーブル・ダウンロードリンク・チャートへの出力口

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::download_artifact::ArtifactHandle;
use crate::domain::entities::upload_status::UploadStatus;
use crate::domain::services::result_formatter::TableRow;

/// ワークフローの表示先
#[cfg_attr(test, automock)]
pub trait WorkflowPresenter: Send + Sync {
    /// ステータス表示を更新
    fn show_status(&self, status: &UploadStatus);

    /// ユーザーへのアラート
    fn alert(&self, message: &str);

    /// テーブルプレビューを表示
    fn show_table(&self, rows: &[TableRow]);

    /// ダウンロード可能になったCSVを表示
    fn show_download(&self, handle: &ArtifactHandle);

    /// チャートの出力先を表示
    fn show_chart(&self, location: &str);
}
