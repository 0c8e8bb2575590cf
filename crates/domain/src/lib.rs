//! # OrderFlow ドメイン層
//!
//! 受注（Order）のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`order::Order`]）
//! - **値オブジェクト**: 識別子の Newtype（[`order::OrderId`]）
//! - **ドメインエラー**: 入力値の検証失敗を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! order-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use orderflow_domain::order::{NewOrder, Order};
//!
//! let order = Order::new(NewOrder {
//!     id:           None,
//!     order_no:     "A100".to_string(),
//!     product_name: "Widget".to_string(),
//!     price:        9.99,
//!     quantity:     3,
//! })
//! .unwrap();
//!
//! assert!(order.id().is_none());
//! ```

pub mod error;
pub mod order;

pub use error::DomainError;
