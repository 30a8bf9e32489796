use super::*;

/// Tests registering a new customer.
///
/// Expected: customer account with a normalized email, a verifiable access token
/// and a stored refresh token
#[tokio::test]
async fn creates_customer_and_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let session = AuthService::new(db, &tokens)
        .register(register_params("  Maria@Example.COM "))
        .await?;

    assert_eq!(session.user.email, "maria@example.com");
    assert_eq!(session.user.role, UserRole::Customer);
    assert_eq!(session.expires_in, 15 * 60);

    let claims = tokens.verify_access_token(&session.access_token)?;
    assert_eq!(claims.user_id()?, session.user.id);

    let stored = entity::prelude::RefreshToken::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_ne!(stored[0].token_hash, session.refresh_token);

    Ok(())
}

/// Tests registering an email that is already taken, in a different case.
///
/// Expected: Err(AuthError::EmailTaken)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    factory::user::UserFactory::new(db)
        .email("maria@example.com")
        .build()
        .await?;

    let result = AuthService::new(db, &tokens)
        .register(register_params("MARIA@example.com"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::EmailTaken(_)))
    ));

    Ok(())
}

/// Tests input validation on registration.
///
/// Expected: Err(AppError::BadRequest) for a short password and a bad email
#[tokio::test]
async fn validates_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();
    let service = AuthService::new(db, &tokens);

    let mut short_password = register_params("maria@example.com");
    short_password.password = "short".to_string();
    assert!(matches!(
        service.register(short_password).await,
        Err(AppError::BadRequest(_))
    ));

    assert!(matches!(
        service.register(register_params("maria.example.com")).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
