use super::*;
use crate::server::service::user::UserService;

/// Tests that an admin cannot remove their own admin role.
///
/// Expected: Err(AppError::BadRequest), role unchanged
#[tokio::test]
async fn forbids_self_demotion() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::user::create_admin(db).await?)?;

    let result = UserService::new(db)
        .set_role(&admin, admin.id, UserRole::Customer)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests promoting another user.
#[tokio::test]
async fn promotes_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::user::create_admin(db).await?)?;
    let customer = factory::user::create_user(db).await?;

    let updated = UserService::new(db)
        .set_role(&admin, customer.id, UserRole::Admin)
        .await?;

    assert_eq!(updated.role, UserRole::Admin);

    Ok(())
}
