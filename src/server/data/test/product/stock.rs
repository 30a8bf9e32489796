use super::*;

/// Tests taking stock when enough units are available.
///
/// Expected: Ok(true) and stock reduced
#[tokio::test]
async fn decrements_available_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(5)
        .build()
        .await?;
    let repo = ProductRepository::new(db);

    assert!(repo.decrement_stock(product.id, 5).await?);

    let reloaded = repo.find_by_id(product.id).await?.unwrap();
    assert_eq!(reloaded.stock, 0);

    Ok(())
}

/// Tests that stock never goes negative.
///
/// Expected: Ok(false) and stock unchanged
#[tokio::test]
async fn refuses_to_oversell() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(2)
        .build()
        .await?;
    let repo = ProductRepository::new(db);

    assert!(!repo.decrement_stock(product.id, 3).await?);

    let reloaded = repo.find_by_id(product.id).await?.unwrap();
    assert_eq!(reloaded.stock, 2);

    Ok(())
}

/// Tests returning units to stock.
#[tokio::test]
async fn increments_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(1)
        .build()
        .await?;
    let repo = ProductRepository::new(db);

    repo.increment_stock(product.id, 4).await?;

    let reloaded = repo.find_by_id(product.id).await?.unwrap();
    assert_eq!(reloaded.stock, 5);

    Ok(())
}
