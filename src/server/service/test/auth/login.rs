use super::*;

/// Tests logging in with the right password, ignoring email case.
#[tokio::test]
async fn accepts_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let user = factory::user::UserFactory::new(db)
        .email("ivan@example.com")
        .password_hash(hash_password("correct horse")?)
        .build()
        .await?;

    let session = AuthService::new(db, &tokens)
        .login("Ivan@Example.com", "correct horse")
        .await?;

    assert_eq!(session.user.id, user.id);

    Ok(())
}

/// Tests that a wrong password and an unknown email fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) in both cases
#[tokio::test]
async fn rejects_invalid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    factory::user::UserFactory::new(db)
        .email("ivan@example.com")
        .password_hash(hash_password("correct horse")?)
        .build()
        .await?;
    let service = AuthService::new(db, &tokens);

    assert!(matches!(
        service.login("ivan@example.com", "battery staple").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));
    assert!(matches!(
        service.login("nobody@example.com", "correct horse").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests creating the bootstrap admin on an empty database.
#[tokio::test]
async fn ensure_admin_creates_account_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();
    let service = AuthService::new(db, &tokens);

    service
        .ensure_admin(Some("admin@example.com"), Some("admin-password"))
        .await?;
    service
        .ensure_admin(Some("other@example.com"), Some("admin-password"))
        .await?;

    let users = entity::prelude::User::find().all(db).await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "admin@example.com");
    assert_eq!(users[0].role, "admin");

    let session = service.login("admin@example.com", "admin-password").await?;
    assert!(session.user.is_admin());

    Ok(())
}
