use super::*;

/// Tests that revenue sums every order except cancelled ones.
///
/// Expected: 1 000.00 + 500.00 ₽, the cancelled 2 000.00 ₽ order is excluded
#[tokio::test]
async fn excludes_cancelled_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::order::create_order(db, user.id).await?;
    factory::order::OrderFactory::new(db, user.id)
        .status("paid")
        .subtotal(500_00)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, user.id)
        .status("cancelled")
        .subtotal(2_000_00)
        .build()
        .await?;

    assert_eq!(StatsRepository::new(db).revenue().await?, 1_500_00);

    Ok(())
}

/// Tests revenue with no orders at all.
#[tokio::test]
async fn is_zero_without_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(StatsRepository::new(db).revenue().await?, 0);

    Ok(())
}
