//! # Core Service ライブラリ
//!
//! 社員・部署 API のハンドラとルーター構築を公開する。
//! 統合テストからルーター全体を組み立てられるよう、`main.rs` と分離している。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
