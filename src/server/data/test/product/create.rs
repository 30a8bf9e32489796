use super::*;

fn params(slug: &str, images: Vec<&str>) -> ProductParams {
    ProductParams {
        name: "Чайник".to_string(),
        slug: slug.to_string(),
        sku: format!("SKU-{}", slug),
        description: String::new(),
        price: 2_500_00,
        compare_at_price: None,
        stock: 5,
        category_id: None,
        is_active: true,
        is_featured: false,
        images: images.into_iter().map(str::to_string).collect(),
    }
}

/// Tests that images are stored in the order given.
///
/// Expected: Ok with images returned by position
#[tokio::test]
async fn stores_images_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo
        .create(params("kettle", vec!["/uploads/b.png", "/uploads/a.png"]))
        .await?;

    let images = repo.get_images(product.id).await?;
    assert_eq!(images, vec!["/uploads/b.png", "/uploads/a.png"]);

    Ok(())
}

/// Tests that updating a product replaces its whole image list.
///
/// Expected: Ok with only the new images left
#[tokio::test]
async fn update_replaces_images() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo
        .create(params("kettle", vec!["/uploads/old-1.png", "/uploads/old-2.png"]))
        .await?;

    let updated = repo
        .update(product.id, params("kettle", vec!["/uploads/new.png"]))
        .await?;

    assert!(updated.is_some());
    assert_eq!(repo.get_images(product.id).await?, vec!["/uploads/new.png"]);
    assert_eq!(
        entity::prelude::ProductImage::find().all(db).await?.len(),
        1
    );

    Ok(())
}

/// Tests updating a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProductRepository::new(db)
        .update(999, params("ghost", vec![]))
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the slug and SKU uniqueness checks, including the excluded id.
#[tokio::test]
async fn detects_taken_slug_and_sku() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .slug("lamp")
        .sku("LAMP-1")
        .build()
        .await?;
    let repo = ProductRepository::new(db);

    assert!(repo.slug_taken("lamp", None).await?);
    assert!(!repo.slug_taken("lamp", Some(product.id)).await?);
    assert!(repo.sku_taken("LAMP-1", None).await?);
    assert!(!repo.sku_taken("LAMP-2", None).await?);

    Ok(())
}
