//! # UploadProgress Value Object
//!
//! リクエストボディ送信中の進捗イベント

/// 送信進捗
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    /// 送信済みバイト数
    pub sent: u64,
    /// 総バイト数（不明な場合は `None`）
    pub total: Option<u64>,
}

impl UploadProgress {
    pub fn new(sent: u64, total: Option<u64>) -> Self {
        Self { sent, total }
    }

    /// 進捗率を四捨五入したパーセントで返す
    ///
    /// 総バイト数が不明または0の場合は `None`
    ///
    /// # 例
    ///
    /// ```
    /// use biascast::domain::entities::upload_progress::UploadProgress;
    ///
    /// assert_eq!(UploadProgress::new(1, Some(3)).percent(), Some(33));
    /// assert_eq!(UploadProgress::new(2, Some(3)).percent(), Some(67));
    /// assert_eq!(UploadProgress::new(10, None).percent(), None);
    /// ```
    pub fn percent(&self) -> Option<u8> {
        let total = self.total.filter(|t| *t > 0)?;
        let ratio = self.sent.min(total) as f64 / total as f64;
        Some((ratio * 100.0).round() as u8)
    }
}
