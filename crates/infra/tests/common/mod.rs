//! テスト共通フィクスチャ
//!
//! MongoDB を使用する統合テストで共通利用する接続ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use std::time::Duration;

use meibo_infra::db::{self, DocumentStore};
use mongodb::bson::oid::ObjectId;

/// テスト用の MONGODB_URI
fn mongodb_uri() -> String {
    dotenvy::dotenv().ok();
    std::env::var("MONGODB_URI").expect("MONGODB_URI must be set (check .env)")
}

/// テストごとに使い捨ての論理データベースへ接続する
///
/// データベース名に `ObjectId` を含め、並列実行時の干渉を避ける。
pub async fn isolated_store() -> DocumentStore {
    let client = db::connect(&mongodb_uri(), Duration::from_secs(10))
        .await
        .expect("MongoDB に接続できること");
    DocumentStore::new(client, format!("meibo_test_{}", ObjectId::new().to_hex()))
}
