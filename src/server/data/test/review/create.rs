use super::*;

/// Tests that new reviews wait for moderation.
#[tokio::test]
async fn creates_unapproved_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    let repo = ReviewRepository::new(db);

    assert!(!repo.exists_for(product.id, user.id).await?);

    let review = repo
        .create(CreateReviewParams {
            product_id: product.id,
            user_id: user.id,
            rating: 4,
            comment: "Хороший товар".to_string(),
        })
        .await?;

    assert!(!review.is_approved);
    assert!(repo.exists_for(product.id, user.id).await?);

    let (found, author) = repo.find_by_id(review.id).await?.unwrap();
    assert_eq!(found.rating, 4);
    assert_eq!(author.map(|a| a.id), Some(user.id));

    Ok(())
}

/// Tests approving and then deleting a review.
#[tokio::test]
async fn approves_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    let review = factory::review::create_review(db, product.id, user.id, 5, false).await?;
    let repo = ReviewRepository::new(db);

    let approved = repo.set_approved(review.id, true).await?.unwrap();
    assert!(approved.is_approved);

    assert!(repo.delete(review.id).await?);
    assert!(!repo.delete(review.id).await?);
    assert!(repo.set_approved(review.id, true).await?.is_none());

    Ok(())
}
