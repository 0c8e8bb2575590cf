//! # 受注ハンドラ
//!
//! 受注 CRUD の公開 API を提供する。すべてのレスポンスは
//! [`ApiResponse`] エンベロープで返し、HTTP ステータスと `code` は一致する。
//!
//! ## エンドポイント
//!
//! - `GET /service/getOrders` - 受注一覧
//! - `POST /service/createOrder` - 受注登録
//! - `POST /service/updateOrder` - 受注更新
//! - `GET /service/deleteOrder/{id}` - 受注取消

use std::sync::Arc;

use axum::{
   Json,
   extract::{
      Path,
      State,
      rejection::{JsonRejection, PathRejection},
   },
   http::StatusCode,
   response::{IntoResponse, Response},
};
use orderflow_domain::order::{NewOrder, Order, OrderId};
use orderflow_shared::ApiResponse;
use serde::{Deserialize, Serialize};

use crate::{
   error::{CoreError, METHOD_NOT_ALLOWED_MESSAGE, NOT_FOUND_MESSAGE, failure_response},
   usecase::OrderUseCase,
};

/// 受注 API の共有状態
pub struct OrderState {
   pub usecase: Arc<dyn OrderUseCase>,
}

// --- リクエスト/レスポンス型 ---

/// 受注の登録・更新リクエスト
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
   #[serde(default)]
   pub id:           Option<i64>,
   pub order_no:     String,
   pub product_name: String,
   pub price:        f64,
   pub quantity:     i32,
}

impl TryFrom<OrderRequest> for Order {
   type Error = CoreError;

   fn try_from(req: OrderRequest) -> Result<Self, Self::Error> {
      Ok(Order::new(NewOrder {
         id:           req.id.map(OrderId::from_i64),
         order_no:     req.order_no,
         product_name: req.product_name,
         price:        req.price,
         quantity:     req.quantity,
      })?)
   }
}

/// 受注 DTO
///
/// `id` が未採番の場合はフィールドごと省略する。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
   #[serde(skip_serializing_if = "Option::is_none")]
   pub id:           Option<i64>,
   pub order_no:     String,
   pub product_name: String,
   pub price:        f64,
   pub quantity:     i32,
}

impl From<&Order> for OrderDto {
   fn from(order: &Order) -> Self {
      Self {
         id:           order.id().map(|id| id.as_i64()),
         order_no:     order.order_no().to_string(),
         product_name: order.product_name().to_string(),
         price:        order.price(),
         quantity:     order.quantity(),
      }
   }
}

fn ok_response(orders: &[Order]) -> Response {
   let data = orders.iter().map(OrderDto::from).collect();
   (StatusCode::OK, Json(ApiResponse::ok(data))).into_response()
}

/// JSON ボディを検証済みの [`Order`] に変換する
///
/// デシリアライズ失敗とフィールド制約違反はどちらも `BadRequest`。
fn parse_order(payload: Result<Json<OrderRequest>, JsonRejection>) -> Result<Order, CoreError> {
   let Json(req) = payload.map_err(|rejection| CoreError::BadRequest(rejection.body_text()))?;
   Order::try_from(req)
}

// --- ハンドラ ---

/// GET /service/getOrders
///
/// 失敗時の `message` には原因のエラーメッセージをそのまま入れる。
pub async fn get_orders(State(state): State<Arc<OrderState>>) -> Response {
   match state.usecase.retrieve_all().await {
      Ok(orders) => ok_response(&orders),
      Err(err) => {
         tracing::error!(error = %err, "受注一覧の取得に失敗しました");
         failure_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
      }
   }
}

/// POST /service/createOrder
///
/// ## レスポンス
///
/// - `200 OK`: 送信された受注（`id` なし）
/// - `400 Bad Request`: ボディ不正
/// - `500 Internal Server Error`: 挿入されなかった、または DB エラー
pub async fn create_order(
   State(state): State<Arc<OrderState>>,
   payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<Response, CoreError> {
   let order = parse_order(payload)?;

   if !state.usecase.place(&order).await? {
      return Err(CoreError::OperationFailed);
   }

   Ok(ok_response(std::slice::from_ref(&order)))
}

/// POST /service/updateOrder
///
/// ## レスポンス
///
/// - `200 OK`: 送信された受注
/// - `400 Bad Request`: ボディ不正
/// - `404 Not Found`: `id` に一致する受注がない（`id` 省略時も含む）
/// - `500 Internal Server Error`: DB エラー
pub async fn update_order(
   State(state): State<Arc<OrderState>>,
   payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<Response, CoreError> {
   let order = parse_order(payload)?;

   if !state.usecase.edit(&order).await? {
      return Err(CoreError::NotFound);
   }

   Ok(ok_response(std::slice::from_ref(&order)))
}

/// GET /service/deleteOrder/{id}
///
/// `id` のみを持つ受注（文字列は空、数値は 0）を組み立てて取り消す。
///
/// ## レスポンス
///
/// - `200 OK`: 取り消しに使った受注
/// - `400 Bad Request`: `id` が整数でない
/// - `500 Internal Server Error`: 一致する受注がない、または DB エラー
pub async fn delete_order(
   State(state): State<Arc<OrderState>>,
   id: Result<Path<i64>, PathRejection>,
) -> Result<Response, CoreError> {
   let Path(id) = id.map_err(|rejection| CoreError::BadRequest(rejection.body_text()))?;
   let order = Order::cancellation(OrderId::from_i64(id));

   // 一致なしは 404 ではなく 500 として扱う
   if !state.usecase.cancel(&order).await? {
      return Err(CoreError::OperationFailed);
   }

   Ok(ok_response(std::slice::from_ref(&order)))
}

/// 未定義パスのフォールバック
pub async fn not_found() -> Response {
   failure_response(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}

/// 定義済みパスへの未対応メソッドのフォールバック
pub async fn method_not_allowed() -> Response {
   failure_response(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
}
