//! Coupon factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for coupons.
///
/// Defaults to an active, unlimited 10 % coupon with code `"TEST{id}"`.
pub struct CouponFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    kind: String,
    value: i64,
    min_order_amount: Option<i64>,
    max_uses: Option<i32>,
    used_count: i32,
    starts_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
    is_active: bool,
}

impl<'a> CouponFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            code: format!("TEST{}", next_id()),
            kind: "percent".to_string(),
            value: 10,
            min_order_amount: None,
            max_uses: None,
            used_count: 0,
            starts_at: None,
            expires_at: None,
            is_active: true,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Makes this a fixed-amount coupon worth `value` kopecks.
    pub fn fixed(mut self, value: i64) -> Self {
        self.kind = "fixed".to_string();
        self.value = value;
        self
    }

    /// Makes this a percentage coupon.
    pub fn percent(mut self, value: i64) -> Self {
        self.kind = "percent".to_string();
        self.value = value;
        self
    }

    pub fn min_order_amount(mut self, amount: i64) -> Self {
        self.min_order_amount = Some(amount);
        self
    }

    pub fn max_uses(mut self, max_uses: i32) -> Self {
        self.max_uses = Some(max_uses);
        self
    }

    pub fn used_count(mut self, used_count: i32) -> Self {
        self.used_count = used_count;
        self
    }

    pub fn starts_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::coupon::Model, DbErr> {
        entity::coupon::ActiveModel {
            code: ActiveValue::Set(self.code),
            kind: ActiveValue::Set(self.kind),
            value: ActiveValue::Set(self.value),
            min_order_amount: ActiveValue::Set(self.min_order_amount),
            max_uses: ActiveValue::Set(self.max_uses),
            used_count: ActiveValue::Set(self.used_count),
            starts_at: ActiveValue::Set(self.starts_at),
            expires_at: ActiveValue::Set(self.expires_at),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_coupon(db: &DatabaseConnection) -> Result<entity::coupon::Model, DbErr> {
    CouponFactory::new(db).build().await
}
