//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod file_artifact_repository;
