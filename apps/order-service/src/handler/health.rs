//! # ヘルスチェックハンドラ
//!
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready` — Readiness Check（DB への疎通を確認）
//!
//! レスポンス型は [`orderflow_shared::HealthResponse`] / [`orderflow_shared::ReadinessResponse`] を参照。

use std::{sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use orderflow_infra::db;
use orderflow_shared::{CheckStatus, HealthResponse, ReadinessResponse};
use sqlx::PgPool;

const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Liveness Check エンドポイント
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check 用の State
pub struct ReadinessState {
   pub pool:    PgPool,
   /// 各チェックのタイムアウト
   pub timeout: Duration,
}

impl ReadinessState {
   pub fn new(pool: PgPool) -> Self {
      Self {
         pool,
         timeout: DEFAULT_CHECK_TIMEOUT,
      }
   }
}

/// Readiness Check エンドポイント
///
/// 全チェック OK → 200、1 つでも失敗 → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
   let database = check_database(&state.pool, state.timeout).await;
   let response = ReadinessResponse::from_checks([("database", database)]);

   let http_status = if response.is_ready() {
      StatusCode::OK
   } else {
      StatusCode::SERVICE_UNAVAILABLE
   };

   (http_status, Json(response))
}

async fn check_database(pool: &PgPool, timeout: Duration) -> CheckStatus {
   match tokio::time::timeout(timeout, db::check_connection(pool)).await {
      Ok(Ok(())) => CheckStatus::Ok,
      Ok(Err(e)) => {
         tracing::warn!(error = %e, "readiness check: database query failed");
         CheckStatus::Error
      }
      Err(_) => {
         tracing::warn!("readiness check: database check timed out");
         CheckStatus::Error
      }
   }
}
