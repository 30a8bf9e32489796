//! Cart and cart item factories.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an empty cart for the user.
pub async fn create_cart(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::cart::Model, DbErr> {
    let now = Utc::now();
    entity::cart::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a cart line without any stock or duplicate checks.
pub async fn add_cart_item(
    db: &DatabaseConnection,
    cart_id: i32,
    product_id: i32,
    quantity: i32,
) -> Result<entity::cart_item::Model, DbErr> {
    entity::cart_item::ActiveModel {
        cart_id: ActiveValue::Set(cart_id),
        product_id: ActiveValue::Set(product_id),
        quantity: ActiveValue::Set(quantity),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
