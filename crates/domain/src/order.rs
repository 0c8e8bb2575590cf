//! # 受注
//!
//! 受注（Order）エンティティと、その識別子を定義する。
//!
//! ## ライフサイクル
//!
//! - 登録: `id` なしで作成し、DB が採番する
//! - 参照: 全件取得
//! - 更新: `id` で一致する行を上書きする
//! - 取消: `id` で一致する行を物理削除する（論理削除・監査証跡なし）
//!
//! ## フィールド制約
//!
//! [`validator`] の derive でフィールド単位の制約を宣言し、
//! [`Order::new`] の生成時に検証する。DB から復元する場合（[`Order::from_db`]）は
//! 検証しない。
//!
//! `price` と `quantity` は非負を想定するが、この層では強制しない。

use derive_more::Display;
use validator::Validate;

use crate::DomainError;

/// 受注の一意識別子
///
/// DB の `ID` カラム（IDENTITY 列）が採番するサロゲートキー。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct OrderId(i64);

impl OrderId {
    /// 既存の値から ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の i64 値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// 受注作成時のパラメータ
pub struct NewOrder {
    pub id:           Option<OrderId>,
    pub order_no:     String,
    pub product_name: String,
    pub price:        f64,
    pub quantity:     i32,
}

/// 受注エンティティ
///
/// 受注番号・商品名は 1〜255 文字（`VARCHAR(255)` に合わせる）。
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct Order {
    id:           Option<OrderId>,
    #[validate(length(min = 1, max = 255))]
    order_no:     String,
    #[validate(length(min = 1, max = 255))]
    product_name: String,
    price:        f64,
    quantity:     i32,
}

impl Order {
    /// 受注を作成する
    ///
    /// 宣言されたフィールド制約を検証し、違反があれば
    /// `DomainError::Validation` を返す。
    pub fn new(params: NewOrder) -> Result<Self, DomainError> {
        let order = Self {
            id:           params.id,
            order_no:     params.order_no,
            product_name: params.product_name,
            price:        params.price,
            quantity:     params.quantity,
        };
        order.validate()?;
        Ok(order)
    }

    /// DB の行から受注を復元する
    pub fn from_db(
        id: OrderId,
        order_no: String,
        product_name: String,
        price: f64,
        quantity: i32,
    ) -> Self {
        Self {
            id: Some(id),
            order_no,
            product_name,
            price,
            quantity,
        }
    }

    /// 取消対象を指す ID のみの受注を作成する
    ///
    /// 文字列フィールドは空、数値フィールドは 0 になる。
    pub fn cancellation(id: OrderId) -> Self {
        Self {
            id:           Some(id),
            order_no:     String::new(),
            product_name: String::new(),
            price:        0.0,
            quantity:     0,
        }
    }

    // Getter メソッド

    pub fn id(&self) -> Option<OrderId> {
        self.id
    }

    pub fn order_no(&self) -> &str {
        &self.order_no
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}
