use super::*;

/// Tests loading lines together with their products, oldest first.
#[tokio::test]
async fn loads_lines_with_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, product, cart, _) = factory::helpers::create_cart_with_product(db).await?;
    let other = factory::product::create_product(db).await?;
    factory::cart::add_cart_item(db, cart.id, other.id, 1).await?;

    let lines = CartRepository::new(db).get_lines(cart.id).await?;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0.quantity, 2);
    assert_eq!(lines[0].1.as_ref().map(|p| p.id), Some(product.id));
    assert_eq!(lines[1].1.as_ref().map(|p| p.id), Some(other.id));
    assert_eq!(cart.user_id, user.id);

    Ok(())
}

/// Tests inserting a line and then changing its quantity.
#[tokio::test]
async fn inserts_and_updates_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    let repo = CartRepository::new(db);
    let cart = repo.get_or_create(user.id).await?;

    let item = repo.insert_item(cart.id, product.id, 1).await?;
    repo.set_quantity(item, 5).await?;

    let stored = repo.find_item(cart.id, product.id).await?.unwrap();
    assert_eq!(stored.quantity, 5);

    Ok(())
}

/// Tests removing a single line.
///
/// Expected: true for the stored product, false once it is gone
#[tokio::test]
async fn removes_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product, cart, _) = factory::helpers::create_cart_with_product(db).await?;
    let repo = CartRepository::new(db);

    assert!(repo.remove_item(cart.id, product.id).await?);
    assert!(!repo.remove_item(cart.id, product.id).await?);
    assert!(repo.get_lines(cart.id).await?.is_empty());

    Ok(())
}

/// Tests that clearing only touches the given cart.
#[tokio::test]
async fn clears_only_own_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product, cart, _) = factory::helpers::create_cart_with_product(db).await?;
    let other_user = factory::user::create_user(db).await?;
    let other_cart = factory::cart::create_cart(db, other_user.id).await?;
    factory::cart::add_cart_item(db, other_cart.id, product.id, 1).await?;

    let removed = CartRepository::new(db).clear(cart.id).await?;

    assert_eq!(removed, 1);
    assert_eq!(
        CartRepository::new(db).get_lines(other_cart.id).await?.len(),
        1
    );

    Ok(())
}
