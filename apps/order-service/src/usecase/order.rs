//! 受注ユースケース
//!
//! 各操作はデータアクセス層の同名操作への委譲で、結果を加工しない。

use std::sync::Arc;

use async_trait::async_trait;
use orderflow_domain::order::Order;
use orderflow_infra::repository::Repository;

use crate::error::CoreError;

/// 受注に対する業務操作
///
/// 書き込み系は「1 行以上反映されたか」を返す。
#[async_trait]
pub trait OrderUseCase: Send + Sync {
   /// 全受注を取得する
   async fn retrieve_all(&self) -> Result<Vec<Order>, CoreError>;

   /// 受注を登録する
   async fn place(&self, order: &Order) -> Result<bool, CoreError>;

   /// `id` が一致する受注を上書きする
   async fn edit(&self, order: &Order) -> Result<bool, CoreError>;

   /// `id` が一致する受注を取り消す
   async fn cancel(&self, order: &Order) -> Result<bool, CoreError>;
}

/// [`OrderUseCase`] の標準実装
pub struct OrderUseCaseImpl {
   repository: Arc<dyn Repository<Order>>,
}

impl OrderUseCaseImpl {
   pub fn new(repository: Arc<dyn Repository<Order>>) -> Self {
      Self { repository }
   }
}

#[async_trait]
impl OrderUseCase for OrderUseCaseImpl {
   #[tracing::instrument(skip_all)]
   async fn retrieve_all(&self) -> Result<Vec<Order>, CoreError> {
      let orders = self.repository.find_all().await?;
      tracing::debug!(count = orders.len(), "受注一覧を取得しました");
      Ok(orders)
   }

   #[tracing::instrument(skip_all, fields(order_no = %order.order_no()))]
   async fn place(&self, order: &Order) -> Result<bool, CoreError> {
      Ok(self.repository.create(order).await?)
   }

   #[tracing::instrument(skip_all, fields(order_id = ?order.id()))]
   async fn edit(&self, order: &Order) -> Result<bool, CoreError> {
      Ok(self.repository.update(order).await?)
   }

   #[tracing::instrument(skip_all, fields(order_id = ?order.id()))]
   async fn cancel(&self, order: &Order) -> Result<bool, CoreError> {
      Ok(self.repository.delete(order).await?)
   }
}
