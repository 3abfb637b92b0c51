//! # DownloadArtifact Value Object
//!
//! ダウンロード用のメモリ上のバイナリオブジェクト

/// 予測CSVのファイル名
pub const PREDICTIONS_FILE_NAME: &str = "predictions.csv";

/// CSVのMIMEタイプ
pub const CSV_MIME_TYPE: &str = "text/csv";

/// ダウンロードアーティファクト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DownloadArtifact {
    /// `predictions.csv` としてCSV文書を包む
    pub fn predictions_csv(csv: String) -> Self {
        Self {
            file_name: PREDICTIONS_FILE_NAME.to_string(),
            mime_type: CSV_MIME_TYPE.to_string(),
            bytes: csv.into_bytes(),
        }
    }
}

/// 公開済みアーティファクトへのハンドル
///
/// 次のアーティファクトを公開する前に解放する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactHandle {
    /// 公開ごとに振られる連番
    pub id: u64,
    /// 公開先（ファイルパスなど）
    pub location: String,
}
