//! # テスト用モックリポジトリ
//!
//! ユースケース・API テストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! orderflow-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use orderflow_domain::order::{Order, OrderId};

use crate::{error::InfraError, repository::Repository};

// ===== MockOrderRepository =====

/// `orders` テーブルのインメモリ実装
///
/// 挿入時に DB と同じく 1 からの連番で ID を採番する。
/// `calls()` でリポジトリが呼び出された回数を確認できる。
#[derive(Clone, Default)]
pub struct MockOrderRepository {
    orders:  Arc<Mutex<Vec<Order>>>,
    next_id: Arc<Mutex<i64>>,
    calls:   Arc<AtomicUsize>,
}

impl MockOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在保持している受注のスナップショットを返す
    pub fn orders(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }

    /// リポジトリメソッドが呼び出された回数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Repository<Order> for MockOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, InfraError> {
        self.record_call();
        Ok(self.orders())
    }

    async fn create(&self, order: &Order) -> Result<bool, InfraError> {
        self.record_call();
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            OrderId::from_i64(*next_id)
        };
        self.orders.lock().unwrap().push(Order::from_db(
            id,
            order.order_no().to_string(),
            order.product_name().to_string(),
            order.price(),
            order.quantity(),
        ));
        Ok(true)
    }

    async fn update(&self, order: &Order) -> Result<bool, InfraError> {
        self.record_call();
        let Some(id) = order.id() else {
            return Ok(false);
        };
        let mut orders = self.orders.lock().unwrap();
        match orders.iter_mut().find(|o| o.id() == Some(id)) {
            Some(stored) => {
                *stored = order.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, order: &Order) -> Result<bool, InfraError> {
        self.record_call();
        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| o.id().is_none() || o.id() != order.id());
        Ok(orders.len() < before)
    }
}

// ===== FailingOrderRepository =====

/// すべての操作が DB エラーで失敗するリポジトリ
#[derive(Clone, Copy, Default)]
pub struct FailingOrderRepository;

#[async_trait]
impl Repository<Order> for FailingOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, InfraError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn create(&self, _order: &Order) -> Result<bool, InfraError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update(&self, _order: &Order) -> Result<bool, InfraError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _order: &Order) -> Result<bool, InfraError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}
