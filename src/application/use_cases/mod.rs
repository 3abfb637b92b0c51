//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **SubmitPredictionUseCase**: CSVの送信とレスポンスの解釈
//! - **RenderResultsUseCase**: プレビュー・CSV・チャートの出力
//! - **CheckHealthUseCase**: サービスのヘルスチェック

pub mod check_health;
pub mod render_results;
pub mod submit_prediction;
