//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてビジネスフローを実現
//! - Repository traitとPresenter traitに依存（実装には依存しない）
//! - HTTPや描画の詳細は知らない
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object
//! - **presenter**: 画面（ステータス・テーブル・ダウンロード・チャート）への出力口
//! - **services**: ステートを持つアプリケーションサービス
//! - **use_cases**: ユースケース

pub mod dto;
pub mod presenter;
pub mod services;
pub mod use_cases;
