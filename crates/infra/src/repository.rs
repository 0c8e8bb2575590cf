//! # リポジトリ実装
//!
//! レコード型ごとの CRUD 操作を抽象化する [`Repository`] トレイトと、
//! その PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **レコード型でパラメータ化**: 1 つのトレイトを、エンティティごとに 1 実装する
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計
//! - **影響行数で結果を返す**: 書き込み系は「1 行以上影響したか」を `bool` で返し、
//!   0 行はエラーとして扱わない

pub mod order_repository;

use async_trait::async_trait;
pub use order_repository::PostgresOrderRepository;

use crate::error::InfraError;

/// レコード型 `T` に対する CRUD 操作
///
/// 各メソッドは単一の SQL 文を実行する。DB 障害は [`InfraError`] として返し、
/// リトライは行わない。
#[async_trait]
pub trait Repository<T: Send + Sync>: Send + Sync {
    /// 全件を取得する（0 件なら空の Vec）
    async fn find_all(&self) -> Result<Vec<T>, InfraError>;

    /// レコードを挿入する
    async fn create(&self, record: &T) -> Result<bool, InfraError>;

    /// ID が一致するレコードを更新する
    async fn update(&self, record: &T) -> Result<bool, InfraError>;

    /// ID が一致するレコードを削除する
    async fn delete(&self, record: &T) -> Result<bool, InfraError>;
}
