//! # Core Service サーバー
//!
//! 社員と部署の CRUD を提供する HTTP サービス。
//!
//! ## 起動シーケンス
//!
//! 1. `.env` の読み込み、トレーシングの初期化
//! 2. 環境変数から設定を読み込む
//! 3. MongoDB に接続し `ping` で疎通を確認する（失敗・タイムアウトなら異常終了）
//! 4. リポジトリと State を組み立て、ルーターを構築してリッスンを開始する
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `MONGODB_URI` | **Yes** | MongoDB 接続文字列 |
//! | `MONGODB_DATABASE` | No | 論理データベース名（デフォルト: `go-crud-mongodb`） |
//! | `MONGODB_CONNECT_TIMEOUT_SECS` | No | 接続確立の待ち時間（デフォルト: `10`） |
//! | `CORE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `CORE_PORT` | No | ポート番号（デフォルト: `8081`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! MONGODB_URI=mongodb://localhost:27017 cargo run -p meibo-core-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use meibo_core_service::{
    app_builder::build_app,
    config::CoreConfig,
    handler::{DepartmentState, EmployeeState, ReadinessState},
};
use meibo_infra::{
    db::{self, DocumentStore},
    repository::{
        DepartmentRepository,
        EmployeeRepository,
        MongoDepartmentRepository,
        MongoEmployeeRepository,
    },
};
use meibo_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Core Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("core-service");
    let _service_span = init_tracing(tracing_config);

    // 設定読み込み
    let config = CoreConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Core Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // MongoDB に接続
    let client = db::connect(&config.mongodb_uri, config.connect_timeout)
        .await
        .context("MongoDB への接続に失敗しました")?;
    let store = DocumentStore::new(client, &config.database_name);
    tracing::info!(database = store.database_name(), "MongoDB に接続しました");

    // 依存コンポーネントを初期化
    let employee_repository: Arc<dyn EmployeeRepository> =
        Arc::new(MongoEmployeeRepository::new(&store));
    let department_repository: Arc<dyn DepartmentRepository> =
        Arc::new(MongoDepartmentRepository::new(&store));

    let employee_state = Arc::new(EmployeeState {
        repository: employee_repository,
    });
    let department_state = Arc::new(DepartmentState {
        repository: department_repository,
    });
    let readiness_state = Arc::new(ReadinessState { store });

    let app = build_app(employee_state, department_state, readiness_state);

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("Core Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
