//! HTTP Adapter Modules
//!
//! 予測サービスとのHTTP通信

pub mod client;
pub mod progress;

pub use client::HttpPredictionGateway;
