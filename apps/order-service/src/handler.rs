//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、業務操作はユースケース層に委譲する

pub mod health;
pub mod order;

pub use health::{ReadinessState, health_check, readiness_check};
pub use order::{
   OrderDto,
   OrderRequest,
   OrderState,
   create_order,
   delete_order,
   get_orders,
   method_not_allowed,
   not_found,
   update_order,
};
