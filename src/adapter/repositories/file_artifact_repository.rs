//! File Artifact Repository Implementation
//!
//! ArtifactRepositoryのファイル実装（ダウンロードCSVを出力ディレクトリに書き出す）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::download_artifact::{ArtifactHandle, DownloadArtifact};
use crate::domain::repositories::artifact_repository::ArtifactRepository;

/// 出力ディレクトリベースのアーティファクトリポジトリ
pub struct FileArtifactRepository {
    output_dir: PathBuf,
    next_id: AtomicU64,
}

impl FileArtifactRepository {
    /// 新しいリポジトリを作成
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// ファイルに書き出す（同期処理）
    fn write_sync(path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create output directory")?;
        }
        fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// ファイルを削除する（同期処理）
    fn remove_sync(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }
}

#[async_trait]
impl ArtifactRepository for FileArtifactRepository {
    async fn publish(&self, artifact: &DownloadArtifact) -> Result<ArtifactHandle> {
        let path = self.output_dir.join(&artifact.file_name);
        let bytes = artifact.bytes.clone();
        let target = path.clone();
        tokio::task::spawn_blocking(move || Self::write_sync(&target, &bytes))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        info!(
            "Saved {} ({}, {} bytes)",
            path.display(),
            artifact.mime_type,
            artifact.bytes.len()
        );

        Ok(ArtifactHandle {
            id,
            location: path.display().to_string(),
        })
    }

    async fn release(&self, handle: &ArtifactHandle) -> Result<()> {
        let path = PathBuf::from(&handle.location);
        tokio::task::spawn_blocking(move || Self::remove_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(())
    }
}
