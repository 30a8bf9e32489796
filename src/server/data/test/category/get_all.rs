use super::*;

/// Tests menu ordering by sort_order and then name.
#[tokio::test]
async fn orders_by_sort_order_then_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let last = factory::category::CategoryFactory::new(db)
        .name("Аксессуары")
        .sort_order(5)
        .build()
        .await?;
    let second = factory::category::CategoryFactory::new(db)
        .name("Посуда")
        .sort_order(1)
        .build()
        .await?;
    let first = factory::category::CategoryFactory::new(db)
        .name("Кофе")
        .sort_order(1)
        .build()
        .await?;

    let ids: Vec<i32> = CategoryRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(ids, vec![first.id, second.id, last.id]);

    Ok(())
}

/// Tests loading direct children of a category.
#[tokio::test]
async fn gets_direct_children() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::category::create_category(db).await?;
    let child = factory::category::CategoryFactory::new(db)
        .parent_id(parent.id)
        .build()
        .await?;
    factory::category::CategoryFactory::new(db)
        .parent_id(child.id)
        .build()
        .await?;

    let children = CategoryRepository::new(db).get_children(parent.id).await?;

    assert_eq!(children.len(), 1);
    assert_eq!(children[0].id, child.id);

    Ok(())
}

/// Tests the slug uniqueness check.
#[tokio::test]
async fn detects_taken_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::CategoryFactory::new(db)
        .slug("coffee")
        .build()
        .await?;
    let repo = CategoryRepository::new(db);

    assert!(repo.slug_taken("coffee", None).await?);
    assert!(!repo.slug_taken("coffee", Some(category.id)).await?);
    assert!(!repo.slug_taken("tea", None).await?);

    Ok(())
}
