//! # ルーター構築
//!
//! ルート定義とミドルウェアの組み立てを担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! ## ミドルウェアの順序（外側から）
//!
//! ```text
//! TraceLayer → CanonicalLogLineLayer → CatchPanicLayer → handler
//! ```

use std::{any::Any, sync::Arc};

use axum::{
   Router,
   http::StatusCode,
   response::Response,
   routing::{get, post},
};
use orderflow_shared::canonical_log::CanonicalLogLineLayer;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
   error::{INTERNAL_ERROR_MESSAGE, failure_response},
   handler::{
      OrderState,
      ReadinessState,
      create_order,
      delete_order,
      get_orders,
      health_check,
      method_not_allowed,
      not_found,
      readiness_check,
      update_order,
   },
};

/// アプリケーションの Router を構築する
pub fn build_app(order_state: Arc<OrderState>, readiness_state: Arc<ReadinessState>) -> Router {
   Router::new()
      .route("/health", get(health_check))
      .route("/health/ready", get(readiness_check))
      .with_state(readiness_state)
      .route("/service/getOrders", get(get_orders))
      .route("/service/createOrder", post(create_order))
      .route("/service/updateOrder", post(update_order))
      .route("/service/deleteOrder/{id}", get(delete_order))
      .with_state(order_state)
      .fallback(not_found)
      .method_not_allowed_fallback(method_not_allowed)
      .layer(CatchPanicLayer::custom(handle_panic))
      .layer(CanonicalLogLineLayer)
      .layer(TraceLayer::new_for_http())
}

/// ハンドラの panic を 500 エンベロープに変換する
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
   let detail = payload
      .downcast_ref::<String>()
      .map(String::as_str)
      .or_else(|| payload.downcast_ref::<&str>().copied())
      .unwrap_or("unknown panic");
   tracing::error!(panic = %detail, "ハンドラで panic が発生しました");

   failure_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}
