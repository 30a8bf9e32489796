use super::*;

/// Tests deleting a category that still has products and children.
///
/// Expected: the category is gone; products and children are detached, not deleted
#[tokio::test]
async fn detaches_products_and_children() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let parent = factory::category::create_category(db).await?;
    let child = factory::category::CategoryFactory::new(db)
        .parent_id(parent.id)
        .build()
        .await?;
    let product = factory::product::ProductFactory::new(db)
        .category_id(parent.id)
        .build()
        .await?;

    let deleted = CategoryRepository::new(db).delete(parent.id).await?;
    assert!(deleted);

    let product = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(product.category_id, None);

    let child = entity::prelude::Category::find_by_id(child.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(child.parent_id, None);

    Ok(())
}

/// Tests deleting a category that does not exist.
#[tokio::test]
async fn returns_false_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!CategoryRepository::new(db).delete(99).await?);

    Ok(())
}
