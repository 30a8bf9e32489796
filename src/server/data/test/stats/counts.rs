use super::*;

/// Tests product, user and pending review counters.
#[tokio::test]
async fn counts_catalog_and_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::user::create_admin(db).await?;
    let product = factory::product::create_product(db).await?;
    factory::product::ProductFactory::new(db)
        .active(false)
        .build()
        .await?;
    factory::review::create_review(db, product.id, user.id, 5, false).await?;
    factory::review::create_review(db, product.id, user.id, 4, true).await?;

    let repo = StatsRepository::new(db);

    assert_eq!(repo.count_products().await?, 2);
    assert_eq!(repo.count_users().await?, 2);
    assert_eq!(repo.count_pending_reviews().await?, 1);

    Ok(())
}

/// Tests grouping orders by status.
#[tokio::test]
async fn groups_orders_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::order::create_order(db, user.id).await?;
    factory::order::create_order(db, user.id).await?;
    factory::order::OrderFactory::new(db, user.id)
        .status("delivered")
        .build()
        .await?;

    let counts = StatsRepository::new(db).count_orders_by_status().await?;

    assert_eq!(counts.get("pending"), Some(&2));
    assert_eq!(counts.get("delivered"), Some(&1));
    assert_eq!(counts.get("cancelled"), None);

    Ok(())
}
