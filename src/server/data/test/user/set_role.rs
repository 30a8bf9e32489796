use super::*;

/// Tests promoting a customer.
#[tokio::test]
async fn changes_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let updated = UserRepository::new(db)
        .set_role(user.id, UserRole::Admin)
        .await?
        .unwrap();

    assert_eq!(updated.role, "admin");

    Ok(())
}

/// Tests changing the role of a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).set_role(404, UserRole::Admin).await?;

    assert!(result.is_none());

    Ok(())
}
