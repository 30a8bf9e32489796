use super::*;

/// Tests that the public listing hides inactive products and the admin one does not.
///
/// Expected: 1 product publicly, 2 with `include_inactive`
#[tokio::test]
async fn hides_inactive_products_unless_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::create_product(db).await?;
    factory::product::ProductFactory::new(db)
        .active(false)
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    let (public, public_total) = repo.get_paginated(&ProductFilter::default(), 0, 20).await?;
    assert_eq!(public_total, 1);
    assert!(public.iter().all(|p| p.is_active));

    let admin_filter = ProductFilter {
        include_inactive: true,
        ..Default::default()
    };
    let (_, admin_total) = repo.get_paginated(&admin_filter, 0, 20).await?;
    assert_eq!(admin_total, 2);

    Ok(())
}

/// Tests filtering by category ids, price range and stock together.
///
/// Expected: Only the in-stock product of the category within the price range
#[tokio::test]
async fn combines_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let matching = factory::product::ProductFactory::new(db)
        .category_id(category.id)
        .price(500_00)
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .category_id(category.id)
        .price(500_00)
        .stock(0)
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .category_id(category.id)
        .price(5_000_00)
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .price(500_00)
        .build()
        .await?;

    let filter = ProductFilter {
        category_ids: Some(vec![category.id]),
        min_price: Some(100_00),
        max_price: Some(1_000_00),
        in_stock: true,
        ..Default::default()
    };
    let (products, total) = ProductRepository::new(db).get_paginated(&filter, 0, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(products[0].id, matching.id);

    Ok(())
}

/// Tests that search matches the SKU as well as the name.
#[tokio::test]
async fn searches_name_and_sku() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::ProductFactory::new(db)
        .name("Кружка керамическая")
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .sku("MUG-42")
        .build()
        .await?;
    factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);

    let by_name = ProductFilter {
        search: Some("Кружка".to_string()),
        ..Default::default()
    };
    assert_eq!(repo.get_paginated(&by_name, 0, 20).await?.1, 1);

    let by_sku = ProductFilter {
        search: Some("MUG".to_string()),
        ..Default::default()
    };
    assert_eq!(repo.get_paginated(&by_sku, 0, 20).await?.1, 1);

    let mixed_case = ProductFilter {
        search: Some("mug-42".to_string()),
        ..Default::default()
    };
    assert_eq!(repo.get_paginated(&mixed_case, 0, 20).await?.1, 1);

    Ok(())
}

/// Tests price sorting in both directions.
#[tokio::test]
async fn sorts_by_price() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for price in [300_00, 100_00, 200_00] {
        factory::product::ProductFactory::new(db)
            .price(price)
            .build()
            .await?;
    }
    let repo = ProductRepository::new(db);

    let ascending = ProductFilter {
        sort: ProductSort::PriceAsc,
        ..Default::default()
    };
    let (products, _) = repo.get_paginated(&ascending, 0, 20).await?;
    let prices: Vec<i64> = products.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![100_00, 200_00, 300_00]);

    let descending = ProductFilter {
        sort: ProductSort::PriceDesc,
        ..Default::default()
    };
    let (products, _) = repo.get_paginated(&descending, 0, 20).await?;
    assert_eq!(products[0].price, 300_00);

    Ok(())
}

/// Tests that pages are zero-based and the total covers all pages.
#[tokio::test]
async fn paginates_from_page_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::product::create_product(db).await?;
    }
    let repo = ProductRepository::new(db);

    let (first, total) = repo.get_paginated(&ProductFilter::default(), 0, 2).await?;
    let (last, _) = repo.get_paginated(&ProductFilter::default(), 2, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(first.len(), 2);
    assert_eq!(last.len(), 1);

    Ok(())
}
