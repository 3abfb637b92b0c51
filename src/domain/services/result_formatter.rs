//! # Result Formatter Service
//!
//! 予測結果をテーブルプレビューとCSV文書に整形するサービス

use crate::domain::entities::prediction::PredictionPoint;

/// テーブルプレビューの既定件数
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

/// CSVヘッダー行
pub const CSV_HEADER: &str = "index,timestamp,prediction";

/// 指数表記の小数部桁数
const FRACTION_DIGITS: usize = 16;

/// テーブルの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 1始まりの行番号
    pub index: usize,
    pub timestamp: String,
    /// 指数表記に整形済みの予測値
    pub prediction: String,
}

/// 結果整形サービス
pub struct ResultFormatter;

impl ResultFormatter {
    /// 予測値を小数部16桁の指数表記に整形します。
    ///
    /// 指数には常に符号が付き、負のゼロは `0` として扱う
    ///
    /// # 例
    ///
    /// ```
    /// use biascast::domain::services::result_formatter::ResultFormatter;
    ///
    /// assert_eq!(ResultFormatter::format_prediction(1.0), "1.0000000000000000e+0");
    /// assert_eq!(ResultFormatter::format_prediction(0.00048828125), "4.8828125000000000e-4");
    /// assert_eq!(ResultFormatter::format_prediction(-2.5e10), "-2.5000000000000000e+10");
    /// ```
    pub fn format_prediction(value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
        }

        // -0.0 == 0.0
        let value = if value == 0.0 { 0.0 } else { value };
        let formatted = format!("{:.*e}", FRACTION_DIGITS, value);

        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    }

    /// 先頭 `limit` 件のプレビュー行を作成
    ///
    /// # Arguments
    ///
    /// * `predictions` - 受信順の予測
    /// * `limit` - 最大行数
    pub fn preview(predictions: &[PredictionPoint], limit: usize) -> Vec<TableRow> {
        predictions
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, p)| Self::to_row(i, p))
            .collect()
    }

    /// 全予測を含むCSV文書を作成
    ///
    /// ヘッダーの後に全行を改行区切りで続ける（末尾の改行なし）
    pub fn to_csv(predictions: &[PredictionPoint]) -> String {
        let mut lines = Vec::with_capacity(predictions.len() + 1);
        lines.push(CSV_HEADER.to_string());
        lines.extend(predictions.iter().enumerate().map(|(i, p)| {
            let row = Self::to_row(i, p);
            format!("{},{},{}", row.index, row.timestamp, row.prediction)
        }));
        lines.join("\n")
    }

    fn to_row(position: usize, point: &PredictionPoint) -> TableRow {
        TableRow {
            index: position + 1,
            timestamp: point.ts.clone(),
            prediction: Self::format_prediction(point.pred),
        }
    }
}
