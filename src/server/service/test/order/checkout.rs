use super::*;

/// Tests a checkout with a coupon and paid delivery.
///
/// The cart holds 2 × 1 000.00 ₽; a 10 % coupon takes 200.00 ₽ off and
/// delivery costs 300.00 ₽ because the discounted subtotal is under the
/// free delivery threshold.
///
/// Expected: pending order totalling 2 100.00 ₽, stock and coupon usage updated, cart emptied
#[tokio::test]
async fn creates_order_from_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, product, _, _) = factory::helpers::create_cart_with_product(db).await?;
    let coupon = factory::coupon::CouponFactory::new(db)
        .code("SALE10")
        .percent(10)
        .build()
        .await?;
    factory::setting::create_setting(db, "shipping_cost", "30000").await?;
    factory::setting::create_setting(db, "free_shipping_threshold", "500000").await?;

    let mut params = checkout_params(user.id);
    params.coupon_code = Some(" sale10 ".to_string());

    let order = OrderService::new(db).checkout(params).await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.order_number.starts_with("ORD-"));
    assert_eq!(order.subtotal, 2_000_00);
    assert_eq!(order.discount, 200_00);
    assert_eq!(order.shipping, 300_00);
    assert_eq!(order.total, 2_100_00);
    assert_eq!(order.coupon_code.as_deref(), Some("SALE10"));
    assert_eq!(order.customer_email, "ivan@example.com");
    assert_eq!(order.comment, None);

    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].product_name, product.name);
    assert_eq!(order.items[0].unit_price, 1_000_00);
    assert_eq!(order.items[0].line_total, 2_000_00);

    assert_eq!(product_stock(db, product.id).await, 8);
    assert_eq!(coupon_usage(db, coupon.id).await, 1);
    assert!(load_user_cart(db, user.id).await?.is_empty());

    Ok(())
}

/// Tests that delivery is free once the subtotal reaches the threshold.
#[tokio::test]
async fn applies_free_shipping_threshold() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_cart_with_product(db).await?;
    factory::setting::create_setting(db, "shipping_cost", "30000").await?;
    factory::setting::create_setting(db, "free_shipping_threshold", "200000").await?;

    let order = OrderService::new(db).checkout(checkout_params(user.id)).await?;

    assert_eq!(order.shipping, 0);
    assert_eq!(order.total, 2_000_00);

    Ok(())
}

/// Tests checking out with an empty cart.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_empty_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = OrderService::new(db).checkout(checkout_params(user.id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a line exceeding stock aborts checkout without side effects.
///
/// Expected: Err(AppError::BadRequest), stock and cart unchanged, no order stored
#[tokio::test]
async fn rejects_insufficient_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let plenty = factory::product::create_product(db).await?;
    let scarce = factory::product::ProductFactory::new(db)
        .stock(1)
        .build()
        .await?;
    let cart = factory::cart::create_cart(db, user.id).await?;
    factory::cart::add_cart_item(db, cart.id, plenty.id, 1).await?;
    factory::cart::add_cart_item(db, cart.id, scarce.id, 3).await?;

    let result = OrderService::new(db).checkout(checkout_params(user.id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(product_stock(db, plenty.id).await, 100);
    assert_eq!(product_stock(db, scarce.id).await, 1);
    assert_eq!(load_user_cart(db, user.id).await?.lines.len(), 2);
    assert!(entity::prelude::Order::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that a rejected coupon aborts checkout.
///
/// Expected: Err(AppError::BadRequest) for an exhausted coupon, stock untouched
#[tokio::test]
async fn rejects_exhausted_coupon() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, product, _, _) = factory::helpers::create_cart_with_product(db).await?;
    factory::coupon::CouponFactory::new(db)
        .code("ONCE")
        .max_uses(1)
        .used_count(1)
        .build()
        .await?;

    let mut params = checkout_params(user.id);
    params.coupon_code = Some("ONCE".to_string());

    let result = OrderService::new(db).checkout(params).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(product_stock(db, product.id).await, 10);

    Ok(())
}

/// Tests that an unknown coupon code is reported as missing.
#[tokio::test]
async fn rejects_unknown_coupon() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_cart_with_product(db).await?;

    let mut params = checkout_params(user.id);
    params.coupon_code = Some("NOPE".to_string());

    let result = OrderService::new(db).checkout(params).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests contact data validation before anything is touched.
#[tokio::test]
async fn rejects_invalid_contact_data() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_cart_with_product(db).await?;
    let service = OrderService::new(db);

    let mut params = checkout_params(user.id);
    params.customer_email = "not-an-email".to_string();
    assert!(matches!(
        service.checkout(params).await,
        Err(AppError::BadRequest(_))
    ));

    let mut params = checkout_params(user.id);
    params.shipping_address = "   ".to_string();
    assert!(matches!(
        service.checkout(params).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
