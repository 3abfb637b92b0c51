//! # Domain Layer
//!
//! このモジュールは予測クライアントの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTPやファイルシステムについて何も知らない
//! - 純粋なデータ整形ロジック
//! - 外部システムとの境界はtraitとしてのみ定義
//!
//! ## 構成要素
//!
//! - **entities**: エンティティとバリューオブジェクト（PredictionPoint, UploadStatusなど）
//! - **errors**: 送信ワークフローのエラー分類
//! - **repositories**: 外部システムとの境界trait（インターフェース定義のみ）
//! - **services**: Domain Service（結果の整形）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
