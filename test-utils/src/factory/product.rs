//! Product factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let product = ProductFactory::new(&db)
///     .category_id(category.id)
///     .price(499_00)
///     .stock(0)
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    sku: String,
    price: i64,
    compare_at_price: Option<i64>,
    stock: i32,
    category_id: Option<i32>,
    is_active: bool,
    is_featured: bool,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Product {id}"`, slug: `"product-{id}"`, sku: `"SKU-{id}"`
    /// - price: 100.00 ₽ (`100_00` kopecks)
    /// - stock: 100
    /// - active, not featured, no category
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Product {}", id),
            slug: format!("product-{}", id),
            sku: format!("SKU-{}", id),
            price: 100_00,
            compare_at_price: None,
            stock: 100,
            category_id: None,
            is_active: true,
            is_featured: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn compare_at_price(mut self, compare_at_price: i64) -> Self {
        self.compare_at_price = Some(compare_at_price);
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    /// Builds and inserts the product entity into the database.
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();
        entity::product::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            sku: ActiveValue::Set(self.sku),
            description: ActiveValue::Set(String::new()),
            price: ActiveValue::Set(self.price),
            compare_at_price: ActiveValue::Set(self.compare_at_price),
            stock: ActiveValue::Set(self.stock),
            category_id: ActiveValue::Set(self.category_id),
            is_active: ActiveValue::Set(self.is_active),
            is_featured: ActiveValue::Set(self.is_featured),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active product with default values.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_product_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let product = create_product(db).await?;

        assert!(product.is_active);
        assert_eq!(product.price, 100_00);
        assert!(product.sku.starts_with("SKU-"));

        Ok(())
    }
}
