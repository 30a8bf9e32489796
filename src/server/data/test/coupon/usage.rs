use super::*;

/// Tests recording and releasing redemptions.
///
/// Expected: used_count goes 1 → 2 → 1
#[tokio::test]
async fn increments_and_releases_usage() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coupon = factory::coupon::CouponFactory::new(db)
        .used_count(1)
        .build()
        .await?;
    let repo = CouponRepository::new(db);

    assert!(repo.increment_usage(coupon.id).await?);
    assert_eq!(repo.find_by_id(coupon.id).await?.unwrap().used_count, 2);

    repo.release_usage(&coupon.code).await?;
    assert_eq!(repo.find_by_id(coupon.id).await?.unwrap().used_count, 1);

    Ok(())
}

/// Tests that releasing never drops the counter below zero.
#[tokio::test]
async fn release_stops_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coupon = factory::coupon::create_coupon(db).await?;
    let repo = CouponRepository::new(db);

    repo.release_usage(&coupon.code).await?;

    assert_eq!(repo.find_by_id(coupon.id).await?.unwrap().used_count, 0);

    Ok(())
}

/// Tests that a redemption is refused once `max_uses` is reached.
///
/// Expected: the update reports `false` and used_count stays at the limit
#[tokio::test]
async fn refuses_usage_past_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let limited = factory::coupon::CouponFactory::new(db)
        .code("ONCE")
        .max_uses(1)
        .used_count(1)
        .build()
        .await?;
    let unlimited = factory::coupon::CouponFactory::new(db)
        .code("ALWAYS")
        .used_count(50)
        .build()
        .await?;
    let repo = CouponRepository::new(db);

    assert!(!repo.increment_usage(limited.id).await?);
    assert_eq!(repo.find_by_id(limited.id).await?.unwrap().used_count, 1);

    assert!(repo.increment_usage(unlimited.id).await?);
    assert_eq!(repo.find_by_id(unlimited.id).await?.unwrap().used_count, 51);

    Ok(())
}
