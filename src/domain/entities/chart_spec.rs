//! # LineChartSpec Value Object
//!
//! チャートバックエンドに渡すデータとラベルの契約

use super::prediction::PredictionPoint;

/// 線の色 (R, G, B)
pub type SeriesColor = (u8, u8, u8);

/// 単一系列の折れ線チャート定義
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartSpec {
    /// X軸ラベル（タイムスタンプ）
    pub labels: Vec<String>,
    /// Y値
    pub values: Vec<f64>,
    pub series_label: String,
    pub x_title: String,
    pub y_title: String,
    /// 点マーカーを描くかどうか
    pub show_points: bool,
    pub color: SeriesColor,
    pub stroke_width: u32,
}

impl LineChartSpec {
    /// クロックバイアス予測用のチャート定義を作成
    ///
    /// プレビュー件数の上限は適用せず、全予測を系列に使う
    pub fn clock_bias(predictions: &[PredictionPoint]) -> Self {
        Self {
            labels: predictions.iter().map(|p| p.ts.clone()).collect(),
            values: predictions.iter().map(|p| p.pred).collect(),
            series_label: "Predicted Clock Bias (seconds)".to_string(),
            x_title: "Timestamp".to_string(),
            y_title: "Bias (sec)".to_string(),
            show_points: false,
            color: (0x33, 0xff, 0xfa),
            stroke_width: 1,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 有限値のみから求めたY軸の範囲
    ///
    /// 有限値がない場合は `None`
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
