//! Adapter Layer
//!
//! 外部システム（予測サービスHTTP API, ファイルシステム, ターミナル）との統合

pub mod chart;
pub mod config;
pub mod console;
pub mod http;
pub mod repositories;
