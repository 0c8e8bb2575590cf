//! # Order Service サーバー
//!
//! `orders` テーブルの CRUD を公開する HTTP サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ORDER_SERVICE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `ORDER_SERVICE_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `DATABASE_MAX_CONNECTIONS` | No | 最大接続数（デフォルト: `10`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env を読み込む）
//! cargo run -p orderflow-service
//!
//! # 本番環境
//! ORDER_SERVICE_PORT=8080 DATABASE_URL=postgres://... LOG_FORMAT=json \
//!   cargo run -p orderflow-service --release
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use orderflow_infra::{db, repository::PostgresOrderRepository};
use orderflow_service::{
   app::build_app,
   config::OrderServiceConfig,
   handler::{OrderState, ReadinessState},
   usecase::OrderUseCaseImpl,
};
use orderflow_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   init_tracing(&TracingConfig::from_env("order-service"));
   let _tracing_guard = tracing::info_span!("app", service = "order-service").entered();

   let config = OrderServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      "Order Service サーバーを起動します: {}",
      config.bind_address()
   );

   let pool = db::create_pool(&config.database_url, config.max_connections)
      .await
      .context("データベース接続に失敗しました")?;
   tracing::info!(
      max_connections = config.max_connections,
      "データベースに接続しました"
   );

   // 依存コンポーネントを初期化
   let repository = Arc::new(PostgresOrderRepository::new(pool.clone()));
   let order_state = Arc::new(OrderState {
      usecase: Arc::new(OrderUseCaseImpl::new(repository)),
   });
   let readiness_state = Arc::new(ReadinessState::new(pool));

   let app = build_app(order_state, readiness_state);

   let listener = TcpListener::bind(config.bind_address())
      .await
      .with_context(|| format!("{} へのバインドに失敗しました", config.bind_address()))?;
   tracing::info!(
      "Order Service サーバーが起動しました: {}",
      listener.local_addr()?
   );

   axum::serve(listener, app).await?;

   Ok(())
}
