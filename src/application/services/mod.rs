//! # Application Services
//!
//! - **chart_renderer**: 現在のチャートインスタンスを所有し、破棄してから再生成する
//! - **cold_start**: コールドスタート判定用のワンショットタイマー

pub mod chart_renderer;
pub mod cold_start;
