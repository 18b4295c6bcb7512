//! # MongoDB 接続管理
//!
//! プロセス全体で共有する MongoDB クライアントの作成と、
//! コレクションハンドルの払い出しを行う。
//!
//! ## 設計方針
//!
//! - **起動時に一度だけ接続**: [`connect`] は接続確立後に `ping` で疎通を確認する
//! - **リトライしない**: 接続失敗はそのまま `Err` で返し、プロセスの終了は呼び出し元に委ねる
//! - **明示的な受け渡し**: [`DocumentStore`] を各リポジトリの生成時に渡す。
//!   グローバル変数には保持しない
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::time::Duration;
//!
//! use meibo_infra::db::{self, DocumentStore};
//!
//! let client = db::connect("mongodb://localhost:27017", Duration::from_secs(10)).await?;
//! let store = DocumentStore::new(client, db::DEFAULT_DATABASE_NAME);
//! ```

use std::time::Duration;

use mongodb::{Client, Collection, bson::doc, options::ClientOptions};

use crate::error::InfraError;

/// デフォルトの論理データベース名
pub const DEFAULT_DATABASE_NAME: &str = "go-crud-mongodb";

/// 社員コレクション名
pub const EMPLOYEE_COLLECTION: &str = "employees";

/// 部署コレクション名
pub const DEPARTMENT_COLLECTION: &str = "departments";

/// MongoDB クライアントを作成し、疎通を確認する
///
/// アプリケーション起動時に一度だけ呼び出す。
///
/// # 引数
///
/// * `uri` - MongoDB 接続文字列（`mongodb://...` / `mongodb+srv://...`）
/// * `timeout` - 接続確立と `ping` 完了までの待ち時間の上限
///
/// # エラー
///
/// - URI のパース失敗、`ping` の失敗: [`InfraErrorKind::Database`](crate::InfraErrorKind::Database)
/// - `timeout` 超過: [`InfraErrorKind::Timeout`](crate::InfraErrorKind::Timeout)
#[tracing::instrument(skip_all, fields(?timeout))]
pub async fn connect(uri: &str, timeout: Duration) -> Result<Client, InfraError> {
    let connecting = async {
        let mut options = ClientOptions::parse(uri).await?;
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options)?;
        ping(&client).await?;
        Ok::<_, InfraError>(client)
    };

    match tokio::time::timeout(timeout, connecting).await {
        Ok(result) => result,
        Err(_) => Err(InfraError::timeout(timeout)),
    }
}

/// `admin` データベースに `ping` コマンドを送り、疎通を確認する
async fn ping(client: &Client) -> Result<(), InfraError> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    Ok(())
}

/// ストレージアクセサ
///
/// 接続済みクライアントと論理データベース名を保持し、
/// リポジトリにコレクションハンドルを払い出す。起動後は変更されない。
#[derive(Debug, Clone)]
pub struct DocumentStore {
    client:        Client,
    database_name: String,
}

impl DocumentStore {
    pub fn new(client: Client, database_name: impl Into<String>) -> Self {
        Self {
            client,
            database_name: database_name.into(),
        }
    }

    /// 論理データベース名を取得する
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// コレクションハンドルを取得する
    ///
    /// 通信を伴わない純粋な参照で、失敗しない。
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.client.database(&self.database_name).collection(name)
    }

    /// 疎通を確認する（Readiness Check 用）
    #[tracing::instrument(skip_all, level = "debug")]
    pub async fn ping(&self) -> Result<(), InfraError> {
        ping(&self.client).await
    }
}
