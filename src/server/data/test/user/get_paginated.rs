use super::*;

/// Tests searching users by part of the email or name.
#[tokio::test]
async fn searches_email_and_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let by_email = factory::user::UserFactory::new(db)
        .email("olga@shop.test")
        .build()
        .await?;
    let by_name = factory::user::UserFactory::new(db)
        .name("Olga Petrova")
        .build()
        .await?;
    factory::user::create_user(db).await?;

    let (users, total) = UserRepository::new(db)
        .get_paginated(Some("olga"), 0, 20)
        .await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert!(ids.contains(&by_email.id));
    assert!(ids.contains(&by_name.id));

    let (_, upper_total) = UserRepository::new(db)
        .get_paginated(Some("OLGA"), 0, 20)
        .await?;
    assert_eq!(upper_total, 2);

    Ok(())
}

/// Tests page size and total without a search term.
#[tokio::test]
async fn paginates_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::user::create_user(db).await?;
    }

    let (users, total) = UserRepository::new(db).get_paginated(None, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(users.len(), 1);

    Ok(())
}
