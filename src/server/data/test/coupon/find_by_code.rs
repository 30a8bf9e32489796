use super::*;

/// Tests looking a coupon up by its stored uppercase code.
#[tokio::test]
async fn finds_coupon_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coupon = factory::coupon::CouponFactory::new(db)
        .code("SPRING10")
        .build()
        .await?;
    let repo = CouponRepository::new(db);

    let found = repo.find_by_code("SPRING10").await?;
    assert_eq!(found.map(|c| c.id), Some(coupon.id));
    assert!(repo.find_by_code("AUTUMN").await?.is_none());

    Ok(())
}

/// Tests the code uniqueness check, excluding the coupon being edited.
#[tokio::test]
async fn detects_taken_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coupon = factory::coupon::CouponFactory::new(db)
        .code("WELCOME")
        .build()
        .await?;
    let repo = CouponRepository::new(db);

    assert!(repo.code_taken("WELCOME", None).await?);
    assert!(!repo.code_taken("WELCOME", Some(coupon.id)).await?);

    Ok(())
}
