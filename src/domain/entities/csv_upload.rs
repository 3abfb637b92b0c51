//! # CsvUpload Value Object
//!
//! ユーザーが選択したCSVファイル

/// アップロード対象のCSVファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvUpload {
    file_name: String,
    content: Vec<u8>,
}

impl CsvUpload {
    /// 新しいアップロードを作成
    ///
    /// # Arguments
    ///
    /// * `file_name` - multipartパートに付けるファイル名
    /// * `content` - ファイルの生バイト列
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
