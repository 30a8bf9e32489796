use super::*;

/// Tests a customer cancelling their pending order.
///
/// Expected: status cancelled, stock returned, coupon redemption released
#[tokio::test]
async fn restocks_and_releases_coupon() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, product, _, _) = factory::helpers::create_cart_with_product(db).await?;
    let coupon = factory::coupon::CouponFactory::new(db)
        .code("WELCOME")
        .build()
        .await?;

    let service = OrderService::new(db);
    let mut params = checkout_params(user.id);
    params.coupon_code = Some("WELCOME".to_string());
    let order = service.checkout(params).await?;
    assert_eq!(product_stock(db, product.id).await, 8);

    let cancelled = service.cancel_by_customer(user.id, order.id).await?;

    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(product_stock(db, product.id).await, 10);
    assert_eq!(coupon_usage(db, coupon.id).await, 0);

    Ok(())
}

/// Tests cancelling an order that has already been paid.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_non_pending_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let order = factory::order::OrderFactory::new(db, user.id)
        .status("paid")
        .build()
        .await?;

    let result = OrderService::new(db)
        .cancel_by_customer(user.id, order.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests cancelling someone else's order.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn hides_other_users_orders() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, owner.id).await?;

    let result = OrderService::new(db)
        .cancel_by_customer(stranger.id, order.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
