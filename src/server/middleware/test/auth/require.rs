use super::*;

/// Tests a customer with a valid token passes an empty permission list.
///
/// Expected: Ok(User) matching the token subject
#[tokio::test]
async fn grants_access_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let user = factory::user::UserFactory::new(db)
        .email("anna@example.ru")
        .build()
        .await?;
    let headers = bearer(&token_for(&tokens, user.clone()));

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.email, "anna@example.ru");

    Ok(())
}

/// Tests an admin passes the admin permission check.
///
/// Expected: Ok(User) with admin role
#[tokio::test]
async fn grants_admin_permission_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let admin = factory::user::create_admin(db).await?;
    let headers = bearer(&token_for(&tokens, admin));

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert!(result.is_admin());

    Ok(())
}

/// Tests a customer is denied the admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_customer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let user = factory::user::create_user(db).await?;
    let user_id = user.id;
    let headers = bearer(&token_for(&tokens, user));

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) => assert_eq!(id, user_id),
        other => panic!("Expected AccessDenied, got {:?}", other),
    }

    Ok(())
}

/// Tests role is read from the database, not the token.
///
/// A token issued while the user was admin stops granting admin access once
/// the stored role is changed.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn uses_current_role_from_database() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let admin = factory::user::create_admin(db).await?;
    let admin_id = admin.id;
    let headers = bearer(&token_for(&tokens, admin));

    crate::server::data::user::UserRepository::new(db)
        .set_role(admin_id, crate::model::user::UserRole::Customer)
        .await?;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a non-bearer Authorization scheme is treated as missing.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_with_basic_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn fails_with_foreign_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let user = factory::user::create_user(db).await?;
    let foreign = TokenIssuer::new("other-secret", Duration::minutes(15), Duration::days(30));
    let headers = bearer(&token_for(&foreign, user));

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token for a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_when_user_deleted() -> Result<(), AppError> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let user = factory::user::create_user(db).await?;
    let user_id = user.id;
    let headers = bearer(&token_for(&tokens, user));

    entity::prelude::User::delete_by_id(user_id).exec(db).await?;

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) => assert_eq!(id, user_id),
        other => panic!("Expected UserNotInDatabase, got {:?}", other),
    }

    Ok(())
}
