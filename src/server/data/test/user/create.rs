use super::*;

/// Tests creating a user and finding it by email.
#[tokio::test]
async fn creates_and_finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(CreateUserParams {
            email: "anna@example.com".to_string(),
            password_hash: "hash".to_string(),
            name: "Анна".to_string(),
            phone: Some("+79991234567".to_string()),
            role: UserRole::Customer,
        })
        .await?;

    assert_eq!(created.role, "customer");

    let found = repo.find_by_email("anna@example.com").await?.unwrap();
    assert_eq!(found.id, created.id);
    assert!(repo.find_by_email("boris@example.com").await?.is_none());

    Ok(())
}
