//! # Order Service ライブラリ
//!
//! `orders` テーブルに対する CRUD を HTTP で公開するサービス。
//! テストからルーターとユースケースを組み立てられるよう、各層を公開する。
//!
//! ```text
//! handler（API） → usecase（業務） → orderflow_infra::repository（データアクセス）
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
