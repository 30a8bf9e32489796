use super::*;

/// Tests walking an order through the fulfilment states.
#[tokio::test]
async fn follows_allowed_transitions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, user.id).await?;
    let service = OrderService::new(db);

    for status in [
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ] {
        let updated = service.update_status(order.id, status).await?;
        assert_eq!(updated.status, status);
    }

    Ok(())
}

/// Tests a transition that skips a step.
///
/// Expected: Err(AppError::BadRequest) for pending → delivered
#[tokio::test]
async fn rejects_skipping_states() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, user.id).await?;

    let result = OrderService::new(db)
        .update_status(order.id, OrderStatus::Delivered)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests an admin cancelling a paid order.
///
/// Expected: items go back to stock and the coupon redemption is released
#[tokio::test]
async fn admin_cancel_restocks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .stock(5)
        .build()
        .await?;
    let coupon = factory::coupon::CouponFactory::new(db)
        .code("PAID10")
        .used_count(1)
        .build()
        .await?;
    let order = factory::order::OrderFactory::new(db, user.id)
        .status("paid")
        .coupon_code("PAID10")
        .build()
        .await?;
    factory::order::create_order_item(db, order.id, &product, 3).await?;

    let cancelled = OrderService::new(db)
        .update_status(order.id, OrderStatus::Cancelled)
        .await?;

    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(product_stock(db, product.id).await, 8);
    assert_eq!(coupon_usage(db, coupon.id).await, 0);

    Ok(())
}

/// Tests that a delivered order is final.
#[tokio::test]
async fn delivered_is_final() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let order = factory::order::OrderFactory::new(db, user.id)
        .status("delivered")
        .build()
        .await?;

    let result = OrderService::new(db)
        .update_status(order.id, OrderStatus::Cancelled)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
