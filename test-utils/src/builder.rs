use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are created in the order they are added, so referenced tables must be
/// added before the tables holding foreign keys to them. The `with_*_tables`
/// helpers already respect that order.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, RefreshToken};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(RefreshToken)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed by `build()`, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and refresh token tables used by authentication.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(RefreshToken)
    }

    /// Adds all tables required for catalog operations.
    ///
    /// - User
    /// - Category
    /// - Product
    /// - ProductImage
    /// - Review
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User)
            .with_table(Category)
            .with_table(Product)
            .with_table(ProductImage)
            .with_table(Review)
    }

    /// Adds the catalog tables plus the cart tables.
    pub fn with_cart_tables(self) -> Self {
        self.with_catalog_tables()
            .with_table(Cart)
            .with_table(CartItem)
    }

    /// Adds everything checkout touches: catalog, cart, coupons, orders and settings.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_order_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_order_tables(self) -> Self {
        self.with_cart_tables()
            .with_table(Coupon)
            .with_table(Order)
            .with_table(OrderItem)
            .with_table(Setting)
    }

    /// Adds the tables behind the blog, banners, media library and settings.
    pub fn with_content_tables(self) -> Self {
        self.with_table(User)
            .with_table(Post)
            .with_table(Banner)
            .with_table(Media)
            .with_table(Setting)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
