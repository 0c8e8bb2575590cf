//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するエンティティ生成ヘルパー。
//! Rust の統合テスト規約に従い `tests/common/mod.rs` に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use orderflow_domain::order::{NewOrder, Order, OrderId};
use sqlx::PgPool;

/// 新規登録用の受注（id なし）を作成
pub fn new_order(order_no: &str, product_name: &str, price: f64, quantity: i32) -> Order {
    Order::new(NewOrder {
        id: None,
        order_no: order_no.to_string(),
        product_name: product_name.to_string(),
        price,
        quantity,
    })
    .expect("テスト用受注の作成に失敗")
}

/// 更新用の受注（id あり）を作成
pub fn existing_order(
    id: OrderId,
    order_no: &str,
    product_name: &str,
    price: f64,
    quantity: i32,
) -> Order {
    Order::new(NewOrder {
        id: Some(id),
        order_no: order_no.to_string(),
        product_name: product_name.to_string(),
        price,
        quantity,
    })
    .expect("テスト用受注の作成に失敗")
}

/// 受注を直接 SQL で挿入し、採番された ID を返す
pub async fn insert_order_raw(pool: &PgPool, order_no: &str, product_name: &str) -> OrderId {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO orders (ORDER_NO, PRODUCT_NAME, PRICE, QUANTITY)
        VALUES ($1, $2, 1.0, 1)
        RETURNING ID
        "#,
    )
    .bind(order_no)
    .bind(product_name)
    .fetch_one(pool)
    .await
    .expect("受注の挿入に失敗");
    OrderId::from_i64(id)
}

/// テーブルの行数を数える
pub async fn count_orders(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await
        .expect("件数の取得に失敗");
    count
}
