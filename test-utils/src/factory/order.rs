//! Order factory. Inserts rows directly, bypassing checkout.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    status: String,
    subtotal: i64,
    discount: i64,
    shipping: i64,
    coupon_code: Option<String>,
}

impl<'a> OrderFactory<'a> {
    /// Defaults: `pending`, subtotal 1 000.00 ₽, no discount, free shipping.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            status: "pending".to_string(),
            subtotal: 1_000_00,
            discount: 0,
            shipping: 0,
            coupon_code: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn subtotal(mut self, subtotal: i64) -> Self {
        self.subtotal = subtotal;
        self
    }

    pub fn discount(mut self, discount: i64) -> Self {
        self.discount = discount;
        self
    }

    pub fn coupon_code(mut self, code: impl Into<String>) -> Self {
        self.coupon_code = Some(code.into());
        self
    }

    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        entity::order::ActiveModel {
            order_number: ActiveValue::Set(format!("ORD-TEST-{:06}", next_id())),
            user_id: ActiveValue::Set(self.user_id),
            status: ActiveValue::Set(self.status),
            subtotal: ActiveValue::Set(self.subtotal),
            discount: ActiveValue::Set(self.discount),
            shipping: ActiveValue::Set(self.shipping),
            total: ActiveValue::Set(self.subtotal - self.discount + self.shipping),
            coupon_code: ActiveValue::Set(self.coupon_code),
            customer_name: ActiveValue::Set("Test Customer".to_string()),
            customer_email: ActiveValue::Set("customer@example.com".to_string()),
            customer_phone: ActiveValue::Set("+70000000000".to_string()),
            shipping_address: ActiveValue::Set("Test street 1".to_string()),
            comment: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id).build().await
}

/// Adds a line for `product` to an existing order using the product's current price.
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    product: &entity::product::Model,
    quantity: i32,
) -> Result<entity::order_item::Model, DbErr> {
    entity::order_item::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        product_id: ActiveValue::Set(Some(product.id)),
        product_name: ActiveValue::Set(product.name.clone()),
        sku: ActiveValue::Set(product.sku.clone()),
        unit_price: ActiveValue::Set(product.price),
        quantity: ActiveValue::Set(quantity),
        line_total: ActiveValue::Set(product.price * quantity as i64),
        ..Default::default()
    }
    .insert(db)
    .await
}
