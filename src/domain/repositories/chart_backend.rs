//! # Chart Backend Trait
//!
//! チャートインスタンスの生成と破棄を抽象化

use anyhow::Result;

use crate::domain::entities::chart_spec::LineChartSpec;

/// 生成済みのチャート
///
/// 破棄は `destroy` で明示的に行う
pub trait ChartInstance: Send {
    /// チャートの出力先
    fn location(&self) -> &str;

    /// チャートを破棄
    fn destroy(self: Box<Self>) -> Result<()>;
}

/// チャートバックエンド
pub trait ChartBackend: Send + Sync {
    /// 定義からチャートを生成
    fn construct(&self, spec: &LineChartSpec) -> Result<Box<dyn ChartInstance>>;
}
