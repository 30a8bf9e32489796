use super::*;

/// Tests the product and moderation filters.
#[tokio::test]
async fn filters_by_product_and_approval() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    let other = factory::product::create_product(db).await?;
    let approved = factory::review::create_review(db, product.id, user.id, 5, true).await?;
    factory::review::create_review(db, product.id, user.id, 2, false).await?;
    factory::review::create_review(db, other.id, user.id, 3, true).await?;

    let repo = ReviewRepository::new(db);

    let (reviews, total) = repo
        .get_paginated(Some(product.id), Some(true), 0, 20)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(reviews[0].0.id, approved.id);

    let (_, pending) = repo.get_paginated(None, Some(false), 0, 20).await?;
    assert_eq!(pending, 1);

    let (_, all) = repo.get_paginated(None, None, 0, 20).await?;
    assert_eq!(all, 3);

    Ok(())
}
