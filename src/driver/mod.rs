//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出して送信フローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ユーザーとのインターフェース
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **workflow**: 送信から結果出力までのオーケストレーション

pub mod cli;
pub mod workflow;

pub use cli::Args;
pub use workflow::{DefaultWorkflow, PredictionWorkflow};
