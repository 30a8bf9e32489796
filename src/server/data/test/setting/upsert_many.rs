use super::*;

/// Tests that upserting inserts new keys and overwrites existing ones.
#[tokio::test]
async fn inserts_and_overwrites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_content_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::setting::create_setting(db, "shop_name", "Старое имя").await?;
    factory::setting::create_setting(db, "contact_phone", "+70000000000").await?;

    let repo = SettingRepository::new(db);
    repo.upsert_many(BTreeMap::from([
        ("shop_name".to_string(), "Кофейная лавка".to_string()),
        ("shipping_cost".to_string(), "30000".to_string()),
    ]))
    .await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all["shop_name"], "Кофейная лавка");
    assert_eq!(all["contact_phone"], "+70000000000");
    assert_eq!(repo.get("shipping_cost").await?.as_deref(), Some("30000"));
    assert_eq!(repo.get("missing").await?, None);

    Ok(())
}
