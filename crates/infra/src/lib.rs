//! # Meibo インフラ層
//!
//! ドキュメントストア（MongoDB）との接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **ストレージアクセサ**: 起動時の接続確立と疎通確認、コレクションハンドルの払い出し
//! - **リポジトリ実装**: 社員・部署コレクションに対する単一ドキュメント操作
//! - **識別子の変換**: ドメインの 16 進 ID と MongoDB の `ObjectId` の相互変換
//!
//! ## 依存関係
//!
//! ```text
//! core-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - MongoDB 接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと MongoDB 実装
//! - `mock` - テスト用インメモリリポジトリ（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::time::Duration;
//!
//! use meibo_infra::{db, repository::MongoEmployeeRepository};
//!
//! async fn setup() -> Result<(), meibo_infra::InfraError> {
//!     let client = db::connect("mongodb://localhost:27017", Duration::from_secs(10)).await?;
//!     let store = db::DocumentStore::new(client, db::DEFAULT_DATABASE_NAME);
//!     let employees = MongoEmployeeRepository::new(&store);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::{InfraError, InfraErrorKind};
