use super::*;

/// Tests changing the status of an existing order.
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let order = factory::order::create_order(db, user.id).await?;

    let updated = OrderRepository::new(db)
        .update_status(order.id, OrderStatus::Paid)
        .await?
        .unwrap();

    assert_eq!(updated.status, "paid");

    Ok(())
}

/// Tests updating an order that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderRepository::new(db)
        .update_status(42, OrderStatus::Shipped)
        .await?;

    assert!(result.is_none());

    Ok(())
}
