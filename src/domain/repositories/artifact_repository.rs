//! # Artifact Repository Trait
//!
//! ダウンロードアーティファクトの公開と解放を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::download_artifact::{ArtifactHandle, DownloadArtifact};

/// アーティファクトリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    /// アーティファクトをダウンロード可能な状態にする
    ///
    /// # Returns
    ///
    /// 公開先を示すハンドル
    async fn publish(&self, artifact: &DownloadArtifact) -> Result<ArtifactHandle>;

    /// 以前に公開したアーティファクトを解放
    async fn release(&self, handle: &ArtifactHandle) -> Result<()>;
}
