use super::*;

/// Tests counting products per category.
///
/// Expected: inactive products are ignored and empty categories are absent
#[tokio::test]
async fn counts_only_active_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let coffee = factory::category::create_category(db).await?;
    let empty = factory::category::create_category(db).await?;
    for _ in 0..2 {
        factory::product::ProductFactory::new(db)
            .category_id(coffee.id)
            .build()
            .await?;
    }
    factory::product::ProductFactory::new(db)
        .category_id(coffee.id)
        .active(false)
        .build()
        .await?;
    factory::product::create_product(db).await?;

    let counts = CategoryRepository::new(db).count_active_products().await?;

    assert_eq!(counts.get(&coffee.id), Some(&2));
    assert!(!counts.contains_key(&empty.id));

    Ok(())
}
