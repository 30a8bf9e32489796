//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values (emails, slugs, SKUs) in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a customer with a cart holding one line of a fresh product.
///
/// The product costs 1 000.00 ₽ with 10 units in stock and the cart line
/// has quantity 2.
///
/// # Returns
/// - `Ok((user, product, cart, item))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_cart_with_product(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::product::Model,
        entity::cart::Model,
        entity::cart_item::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let product = crate::factory::product::ProductFactory::new(db)
        .price(1_000_00)
        .stock(10)
        .build()
        .await?;
    let cart = crate::factory::cart::create_cart(db, user.id).await?;
    let item = crate::factory::cart::add_cart_item(db, cart.id, product.id, 2).await?;

    Ok((user, product, cart, item))
}
