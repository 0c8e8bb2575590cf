//! # OrderRepository
//!
//! `orders` テーブルに対する CRUD を担当するリポジトリ。
//!
//! ## テーブル構成
//!
//! | カラム | 型 | 備考 |
//! |--------|----|------|
//! | `ID` | `BIGINT` | IDENTITY 主キー（DB が採番） |
//! | `ORDER_NO` | `VARCHAR(255)` | 一意制約なし |
//! | `PRODUCT_NAME` | `VARCHAR(255)` | |
//! | `PRICE` | `DOUBLE PRECISION` | |
//! | `QUANTITY` | `INTEGER` | |
//!
//! PostgreSQL は引用符なしの識別子を小文字に畳み込むため、
//! 行のマッピングは小文字のフィールド名で行う。

use async_trait::async_trait;
use orderflow_domain::order::{Order, OrderId};
use sqlx::{FromRow, PgPool};

use super::Repository;
use crate::error::InfraError;

/// `orders` テーブルの 1 行
#[derive(Debug, FromRow)]
struct OrderRow {
    id:           i64,
    order_no:     String,
    product_name: String,
    price:        f64,
    quantity:     i32,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order::from_db(
            OrderId::from_i64(row.id),
            row.order_no,
            row.product_name,
            row.price,
            row.quantity,
        )
    }
}

/// PostgreSQL 実装の Order リポジトリ
#[derive(Debug, Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Order> for PostgresOrderRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Order>, InfraError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT ID, ORDER_NO, PRODUCT_NAME, PRICE, QUANTITY
            FROM orders
            ORDER BY ID
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(order_no = order.order_no()))]
    async fn create(&self, order: &Order) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            INSERT INTO orders (ORDER_NO, PRODUCT_NAME, PRICE, QUANTITY)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(order.order_no())
        .bind(order.product_name())
        .bind(order.price())
        .bind(order.quantity())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = ?order.id()))]
    async fn update(&self, order: &Order) -> Result<bool, InfraError> {
        // id なしの場合は NULL をバインドし、どの行にも一致しない
        let result = sqlx::query(
            r#"
            UPDATE orders
            SET ORDER_NO = $1, PRODUCT_NAME = $2, PRICE = $3, QUANTITY = $4
            WHERE ID = $5
            "#,
        )
        .bind(order.order_no())
        .bind(order.product_name())
        .bind(order.price())
        .bind(order.quantity())
        .bind(order.id().map(|id| id.as_i64()))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = ?order.id()))]
    async fn delete(&self, order: &Order) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM orders
            WHERE ID = $1
            "#,
        )
        .bind(order.id().map(|id| id.as_i64()))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
