use super::*;

/// Tests that a cart is created on first use and reused afterwards.
///
/// Expected: both calls return the same cart id
#[tokio::test]
async fn creates_cart_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = CartRepository::new(db);

    assert!(repo.find_by_user(user.id).await?.is_none());

    let first = repo.get_or_create(user.id).await?;
    let second = repo.get_or_create(user.id).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(first.user_id, user.id);

    Ok(())
}
