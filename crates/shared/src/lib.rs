//! # OrderFlow 共有ユーティリティ
//!
//! サービスとインフラ層の双方から使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum に依存しない（HTTP レスポンスへの変換は各サービスの責務）
//! - ログ関連の依存は `observability` feature の背後に置く

pub mod api_response;
#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod health;
pub mod observability;

pub use api_response::ApiResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
