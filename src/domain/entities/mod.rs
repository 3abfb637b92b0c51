//! # Domain Entities
//!
//! エンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **PredictionPoint / PredictionResponse**: サービスが返す予測
//! - **UploadStatus**: ステータス表示の状態
//! - **UploadProgress**: 送信進捗イベント
//! - **CsvUpload**: 選択されたファイル
//! - **DownloadArtifact**: ダウンロード用のCSV
//! - **LineChartSpec**: チャート定義

pub mod chart_spec;
pub mod csv_upload;
pub mod download_artifact;
pub mod prediction;
pub mod upload_progress;
pub mod upload_status;
