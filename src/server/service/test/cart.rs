use super::*;
use crate::server::service::cart::CartService;

/// Tests that adding the same product twice merges into one line.
///
/// Expected: one line with quantity 3 and subtotal 3 × price
#[tokio::test]
async fn merges_repeated_adds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .price(150_00)
        .build()
        .await?;
    let service = CartService::new(db);

    service.add_item(user.id, product.id, 1).await?;
    let cart = service.add_item(user.id, product.id, 2).await?;

    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].quantity, 3);
    assert_eq!(cart.subtotal(), 450_00);

    Ok(())
}

/// Tests that the cart never holds more than the available stock.
///
/// Expected: Err(AppError::BadRequest) when the merged quantity exceeds stock
#[tokio::test]
async fn enforces_stock_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .stock(3)
        .build()
        .await?;
    let service = CartService::new(db);

    service.add_item(user.id, product.id, 2).await?;

    assert!(matches!(
        service.add_item(user.id, product.id, 2).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.update_item(user.id, product.id, 4).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests quantity bounds and inactive products.
#[tokio::test]
async fn rejects_bad_quantity_and_inactive_products() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    let hidden = factory::product::ProductFactory::new(db)
        .active(false)
        .build()
        .await?;
    let service = CartService::new(db);

    assert!(matches!(
        service.add_item(user.id, product.id, 0).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.add_item(user.id, product.id, 100).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.add_item(user.id, hidden.id, 1).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that setting a quantity of zero removes the line.
#[tokio::test]
async fn zero_quantity_removes_line() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, product, _, _) = factory::helpers::create_cart_with_product(db).await?;

    let cart = CartService::new(db)
        .update_item(user.id, product.id, 0)
        .await?;

    assert!(cart.is_empty());

    Ok(())
}

/// Tests that clearing works with and without an existing cart.
#[tokio::test]
async fn clear_empties_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, _) = factory::helpers::create_cart_with_product(db).await?;
    let newcomer = factory::user::create_user(db).await?;
    let service = CartService::new(db);

    service.clear(user.id).await?;
    service.clear(newcomer.id).await?;

    assert!(service.get(user.id).await?.is_empty());
    assert!(service.get(newcomer.id).await?.is_empty());

    Ok(())
}
