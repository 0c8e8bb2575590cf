//! # ユースケース層
//!
//! Order Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Repository<Order>>` で外部から注入
//! - **薄いハンドラ**: 成否の HTTP への対応付けはハンドラが行う

pub mod order;

pub use order::{OrderUseCase, OrderUseCaseImpl};
