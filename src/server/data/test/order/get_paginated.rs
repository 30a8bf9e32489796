use super::*;

/// Tests restricting the listing to one customer.
#[tokio::test]
async fn filters_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    factory::order::create_order(db, alice.id).await?;
    factory::order::create_order(db, alice.id).await?;
    factory::order::create_order(db, bob.id).await?;

    let (orders, total) = OrderRepository::new(db)
        .get_paginated(Some(alice.id), None, 0, 20)
        .await?;

    assert_eq!(total, 2);
    assert!(orders.iter().all(|o| o.user_id == alice.id));

    Ok(())
}

/// Tests the admin status filter.
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::order::create_order(db, user.id).await?;
    let paid = factory::order::OrderFactory::new(db, user.id)
        .status("paid")
        .build()
        .await?;

    let (orders, total) = OrderRepository::new(db)
        .get_paginated(None, Some(OrderStatus::Paid), 0, 20)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(orders[0].id, paid.id);

    Ok(())
}

/// Tests that the newest order comes first.
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::order::create_order(db, user.id).await?;
    let newest = factory::order::create_order(db, user.id).await?;

    let (orders, _) = OrderRepository::new(db)
        .get_paginated(None, None, 0, 20)
        .await?;

    assert_eq!(orders[0].id, newest.id);

    Ok(())
}
