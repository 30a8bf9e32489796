use super::*;

/// Tests that only approved ratings count towards the product rating.
///
/// Expected: (5 + 3, 2)
#[tokio::test]
async fn sums_approved_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    factory::review::create_review(db, product.id, user.id, 5, true).await?;
    factory::review::create_review(db, product.id, user.id, 3, true).await?;
    factory::review::create_review(db, product.id, user.id, 1, false).await?;

    let totals = ReviewRepository::new(db).approved_totals(product.id).await?;

    assert_eq!(totals, (8, 2));

    Ok(())
}

/// Tests a product without reviews.
#[tokio::test]
async fn is_empty_without_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;

    let totals = ReviewRepository::new(db).approved_totals(product.id).await?;

    assert_eq!(totals, (0, 0));

    Ok(())
}
