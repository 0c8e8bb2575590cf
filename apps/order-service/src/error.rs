//! # Order Service エラー定義
//!
//! Order Service 固有のエラーと、レスポンスエンベロープへの変換を定義する。
//!
//! | エラー | HTTP ステータス | `message` |
//! |--------|----------------|-----------|
//! | `BadRequest` | 400 | `Bad Request` |
//! | `NotFound` | 404 | `Not found` |
//! | `OperationFailed` | 500 | `Internal error` |
//! | `Database` | 500 | `Internal error` |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use orderflow_domain::DomainError;
use orderflow_infra::InfraError;
use orderflow_shared::ApiResponse;
use thiserror::Error;

pub const BAD_REQUEST_MESSAGE: &str = "Bad Request";
pub const NOT_FOUND_MESSAGE: &str = "Not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed";

/// Order Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
   /// 不正なリクエスト（データアクセス前に検出）
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// 更新対象の受注が存在しない
   #[error("受注が見つかりません")]
   NotFound,

   /// 書き込みが 1 行も反映されなかった
   #[error("操作が反映されませんでした")]
   OperationFailed,

   /// データベースエラー
   #[error(transparent)]
   Database(#[from] InfraError),
}

impl From<DomainError> for CoreError {
   fn from(err: DomainError) -> Self {
      Self::BadRequest(err.to_string())
   }
}

impl CoreError {
   /// HTTP ステータスとエンベロープの `message`
   pub fn status_and_message(&self) -> (StatusCode, &'static str) {
      match self {
         CoreError::BadRequest(_) => (StatusCode::BAD_REQUEST, BAD_REQUEST_MESSAGE),
         CoreError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
         CoreError::OperationFailed | CoreError::Database(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
         }
      }
   }
}

/// `data = null` のエンベロープを返す
///
/// `code` には HTTP ステータスと同じ値を入れる。
pub fn failure_response(status: StatusCode, message: impl Into<String>) -> Response {
   (
      status,
      Json(ApiResponse::<()>::failure(status.as_u16(), message)),
   )
      .into_response()
}

impl IntoResponse for CoreError {
   fn into_response(self) -> Response {
      match &self {
         CoreError::BadRequest(detail) => {
            tracing::debug!(detail = %detail, "不正なリクエスト");
         }
         CoreError::NotFound => {
            tracing::debug!("受注が見つかりません");
         }
         CoreError::OperationFailed => {
            tracing::warn!("書き込みが反映されませんでした");
         }
         CoreError::Database(e) => {
            tracing::error!(
               error = %e,
               span_trace = %e.span_trace(),
               "データベースエラー"
            );
         }
      }

      let (status, message) = self.status_and_message();
      failure_response(status, message)
   }
}
