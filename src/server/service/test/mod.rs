use chrono::Duration;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::{
    model::{order::OrderStatus, user::UserRole},
    server::{
        error::{auth::AuthError, AppError},
        model::{order::CheckoutParams, user::User},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod cart;
mod order;
mod user;

fn checkout_params(user_id: i32) -> CheckoutParams {
    CheckoutParams {
        user_id,
        customer_name: "Иван Петров".to_string(),
        customer_email: " Ivan@Example.com ".to_string(),
        customer_phone: "+79990001122".to_string(),
        shipping_address: "Москва, ул. Тверская, 1".to_string(),
        comment: Some("  ".to_string()),
        coupon_code: None,
    }
}

async fn product_stock(db: &DatabaseConnection, product_id: i32) -> i32 {
    entity::prelude::Product::find_by_id(product_id)
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .stock
}

async fn coupon_usage(db: &DatabaseConnection, coupon_id: i32) -> i32 {
    entity::prelude::Coupon::find_by_id(coupon_id)
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .used_count
}
