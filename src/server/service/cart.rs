//! Shopping cart service.
//!
//! Every user has at most one cart, created on the first add. Quantities are
//! kept within `1..=99` and never above the product's current stock.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::{
    model::cart::{MAX_CART_QUANTITY, MIN_CART_QUANTITY},
    server::{
        data::{cart::CartRepository, product::ProductRepository},
        error::AppError,
        model::{
            cart::{Cart, CartLine},
            product::Product,
        },
    },
};

pub const INSUFFICIENT_STOCK_MESSAGE: &str = "Недостаточно товара на складе";

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's cart; a user without one gets an empty cart.
    pub async fn get(&self, user_id: i32) -> Result<Cart, AppError> {
        Ok(load_user_cart(self.db, user_id).await?)
    }

    /// Adds a product to the cart, merging with an existing line.
    ///
    /// # Returns
    /// - `Ok(Cart)` - Cart after the change
    /// - `Err(AppError::BadRequest)` - Quantity out of range or above stock
    /// - `Err(AppError::NotFound)` - Product missing or inactive
    pub async fn add_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<Cart, AppError> {
        check_quantity(quantity)?;

        let product = self.active_product(product_id).await?;

        let cart_repo = CartRepository::new(self.db);
        let cart = cart_repo.get_or_create(user_id).await?;

        match cart_repo.find_item(cart.id, product_id).await? {
            Some(item) => {
                let merged = item.quantity + quantity;
                check_quantity(merged)?;
                check_stock(&product, merged)?;
                cart_repo.set_quantity(item, merged).await?;
            }
            None => {
                check_stock(&product, quantity)?;
                cart_repo.insert_item(cart.id, product_id, quantity).await?;
            }
        }

        Ok(load_cart(self.db, cart.id).await?)
    }

    /// Sets the quantity of a line; zero removes it.
    pub async fn update_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<Cart, AppError> {
        if quantity == 0 {
            return self.remove_item(user_id, product_id).await;
        }
        check_quantity(quantity)?;

        let cart_repo = CartRepository::new(self.db);
        let cart = cart_repo
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Товар не найден в корзине"))?;
        let item = cart_repo
            .find_item(cart.id, product_id)
            .await?
            .ok_or_else(|| AppError::not_found("Товар не найден в корзине"))?;

        let product = self.active_product(product_id).await?;
        check_stock(&product, quantity)?;

        cart_repo.set_quantity(item, quantity).await?;

        Ok(load_cart(self.db, cart.id).await?)
    }

    pub async fn remove_item(&self, user_id: i32, product_id: i32) -> Result<Cart, AppError> {
        let cart_repo = CartRepository::new(self.db);

        let Some(cart) = cart_repo.find_by_user(user_id).await? else {
            return Err(AppError::not_found("Товар не найден в корзине"));
        };
        if !cart_repo.remove_item(cart.id, product_id).await? {
            return Err(AppError::not_found("Товар не найден в корзине"));
        }

        Ok(load_cart(self.db, cart.id).await?)
    }

    /// Empties the cart. Succeeds for users without a cart.
    pub async fn clear(&self, user_id: i32) -> Result<(), AppError> {
        let cart_repo = CartRepository::new(self.db);

        if let Some(cart) = cart_repo.find_by_user(user_id).await? {
            cart_repo.clear(cart.id).await?;
        }

        Ok(())
    }

    async fn active_product(&self, product_id: i32) -> Result<Product, AppError> {
        ProductRepository::new(self.db)
            .find_by_id(product_id)
            .await?
            .filter(|p| p.is_active)
            .map(Product::from_entity)
            .ok_or_else(|| AppError::not_found("Товар не найден"))
    }
}

/// Loads the user's cart lines with products and first images.
///
/// Works on a plain connection or inside a transaction.
pub async fn load_user_cart<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<Cart, DbErr> {
    match CartRepository::new(db).find_by_user(user_id).await? {
        Some(cart) => load_cart(db, cart.id).await,
        None => Ok(Cart::default()),
    }
}

async fn load_cart<C: ConnectionTrait>(db: &C, cart_id: i32) -> Result<Cart, DbErr> {
    let rows = CartRepository::new(db).get_lines(cart_id).await?;

    let product_ids: Vec<i32> = rows.iter().map(|(item, _)| item.product_id).collect();
    let mut images = ProductRepository::new(db)
        .get_first_images(&product_ids)
        .await?;

    let lines = rows
        .into_iter()
        .filter_map(|(item, product)| {
            product.map(|product| CartLine {
                image_url: images.remove(&product.id),
                product: Product::from_entity(product),
                quantity: item.quantity,
            })
        })
        .collect();

    Ok(Cart { lines })
}

fn check_quantity(quantity: i32) -> Result<(), AppError> {
    if !(MIN_CART_QUANTITY..=MAX_CART_QUANTITY).contains(&quantity) {
        return Err(AppError::bad_request(format!(
            "Количество должно быть от {} до {}",
            MIN_CART_QUANTITY, MAX_CART_QUANTITY
        )));
    }

    Ok(())
}

fn check_stock(product: &Product, quantity: i32) -> Result<(), AppError> {
    if quantity > product.stock {
        return Err(AppError::bad_request(INSUFFICIENT_STOCK_MESSAGE));
    }

    Ok(())
}
