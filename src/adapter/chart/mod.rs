//! Chart Adapter Modules
//!
//! plottersによるチャート描画

pub mod svg_chart;

pub use svg_chart::SvgChartBackend;
