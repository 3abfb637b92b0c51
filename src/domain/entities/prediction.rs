//! # Prediction Entities
//!
//! 予測サービスが返す時系列予測のドメイン表現

use serde::{Deserialize, Serialize};

/// 予測ポイント
///
/// タイムスタンプラベルと予測されたクロックバイアス値の組
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PredictionPoint {
    /// タイムスタンプラベル（サーバーが返した文字列をそのまま保持）
    pub ts: String,
    /// 予測バイアス値（秒）
    pub pred: f64,
}

impl PredictionPoint {
    pub fn new(ts: impl Into<String>, pred: f64) -> Self {
        Self { ts: ts.into(), pred }
    }
}

/// 予測レスポンス
///
/// `predictions` の順序はチャートのX軸とCSVの行順を決めるため、
/// 受信したまま保持する（ソート・重複排除はしない）
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PredictionResponse {
    pub predictions: Vec<PredictionPoint>,
    /// サーバーが申告する予測数
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_predictions: Option<usize>,
}

impl PredictionResponse {
    pub fn new(predictions: Vec<PredictionPoint>) -> Self {
        Self {
            predictions,
            n_predictions: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// 申告数と実際の件数が食い違っているかどうか
    ///
    /// 申告がない場合は `false`
    pub fn count_mismatch(&self) -> bool {
        self.n_predictions
            .is_some_and(|declared| declared != self.predictions.len())
    }

    pub fn into_predictions(self) -> Vec<PredictionPoint> {
        self.predictions
    }
}
