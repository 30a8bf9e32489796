use super::*;

/// Tests that a refresh token can be used exactly once.
///
/// Expected: first refresh returns a new token pair, reusing the old token fails
#[tokio::test]
async fn rotates_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();
    let service = AuthService::new(db, &tokens);

    let session = service.register(register_params("olga@example.com")).await?;

    let refreshed = service.refresh(Some(&session.refresh_token)).await?;
    assert_eq!(refreshed.user.id, session.user.id);
    assert_ne!(refreshed.refresh_token, session.refresh_token);

    let reused = service.refresh(Some(&session.refresh_token)).await;
    assert!(matches!(
        reused,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken))
    ));

    service.refresh(Some(&refreshed.refresh_token)).await?;

    Ok(())
}

/// Tests two refreshes racing with the same token.
///
/// Expected: exactly one of them gets a new session
#[tokio::test]
async fn concurrent_refresh_issues_one_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();
    let service = AuthService::new(db, &tokens);

    let session = service.register(register_params("nina@example.com")).await?;

    let (first, second) = tokio::join!(
        service.refresh(Some(&session.refresh_token)),
        service.refresh(Some(&session.refresh_token)),
    );

    let issued = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(issued, 1);
    assert!([first, second].into_iter().any(|r| matches!(
        r,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken))
    )));

    Ok(())
}

/// Tests refreshing without a cookie.
#[tokio::test]
async fn requires_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();

    let result = AuthService::new(db, &tokens).refresh(None).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingRefreshToken))
    ));

    Ok(())
}

/// Tests that logging out revokes the refresh token.
///
/// Expected: logout succeeds twice and the revoked token no longer refreshes
#[tokio::test]
async fn logout_revokes_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = issuer();
    let service = AuthService::new(db, &tokens);

    let session = service.register(register_params("petr@example.com")).await?;

    service.logout(Some(&session.refresh_token)).await?;
    service.logout(Some(&session.refresh_token)).await?;
    service.logout(None).await?;

    assert!(matches!(
        service.refresh(Some(&session.refresh_token)).await,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken))
    ));

    Ok(())
}
